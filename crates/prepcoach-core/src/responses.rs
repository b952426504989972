//! User-facing reply text.
//!
//! Replies are Markdown with a little emoji, suitable for chat clients.

use crate::catalog::{CompanyKey, CompanyTips};
use prepcoach_types::{AnswerReview, HistoryEntry, InterviewSession, LengthAssessment};

pub fn session_started(session: &InterviewSession) -> String {
    let total = session.total_questions();
    format!(
        "🎯 **Mock Interview Started!**\n\n\
         🏢 **Company:** {}\n\
         💼 **Role:** {}\n\
         📝 **Questions:** {}\n\n\
         **Question 1 of {}:**\n\n\
         \"{}\"\n\n\
         _Reply with your answer, or type \"skip\" to move to the next question._",
        session.company,
        session.role,
        total,
        total,
        session.current_question().unwrap_or_default()
    )
}

pub fn next_question(session: &InterviewSession) -> String {
    format!(
        "**Question {} of {}:**\n\n\"{}\"\n\n_Reply with your answer, or type \"skip\"._",
        session.current_index + 1,
        session.total_questions(),
        session.current_question().unwrap_or_default()
    )
}

pub fn interview_complete(entry: &HistoryEntry) -> String {
    format!(
        "🎉 **Interview Complete!**\n\n\
         📊 You answered {} questions.\n\n\
         _Want feedback on your answers? Type \"Review my answer: ...\" or practice more with \"Start mock interview\"._",
        entry.questions_answered
    )
}

pub fn answer_recorded() -> String {
    "✅ **Answer recorded!**\n\n_Preparing next question..._\n\n---".to_string()
}

pub fn session_not_found() -> String {
    "⚠️ **Session not found.**\n\n*Start a new mock interview with \"Start mock interview\".*"
        .to_string()
}

pub fn all_questions_answered() -> String {
    "⚠️ **Every question in this session already has an answer.**\n\n\
     _Move on to finish the interview._"
        .to_string()
}

pub fn storage_failure() -> String {
    "⚠️ **Something went wrong saving your progress.**\n\n_Please try again in a moment._"
        .to_string()
}

pub fn star_method() -> String {
    "📖 **STAR Method Framework**\n\n\
     **S — Situation**\n\
     Set the context. What was the situation? When and where?\n\n\
     **T — Task**\n\
     What was your responsibility? What needed to be done?\n\n\
     **A — Action**\n\
     What did you specifically do? Use \"I\" not \"we\".\n\n\
     **R — Result**\n\
     What was the outcome? Quantify if possible.\n\n\
     ---\n\n\
     **💡 Tips:**\n\
     • Keep answers under 2 minutes\n\
     • Choose examples from the last 2-3 years\n\
     • Pick situations with clear positive outcomes\n\
     • Practice saying each part aloud"
        .to_string()
}

pub fn behavioral_questions(questions: &[String]) -> String {
    let mut message = format!("📋 **{} Common Behavioral Questions**\n\n", questions.len());
    push_numbered(&mut message, questions);
    message.push_str(
        "💡 **Pro tip:** Use the STAR method to structure your answers!\n\
         _Type \"STAR method explain\" for details._",
    );
    message
}

pub fn technical_questions(role: &str, questions: &[String]) -> String {
    let mut message = format!("🖥️ **{} Technical Questions** for {}\n\n", questions.len(), role);
    push_numbered(&mut message, questions);
    message
}

pub fn answer_review(review: &AnswerReview) -> String {
    let mut message = String::from("📝 **Answer Review**\n\n");
    message.push_str(&format!(
        "**Length:** {} words (target: 100-200 words)\n",
        review.word_count
    ));
    message.push_str(&format!("**Structure:** {} sentences\n\n", review.sentence_count));

    message.push_str(match review.length {
        LengthAssessment::TooShort => {
            "⚠️ **Tip:** Your answer is quite short. Try to provide more specific examples.\n\n"
        }
        LengthAssessment::TooLong => {
            "⚠️ **Tip:** Your answer might be too long. Try to be more concise.\n\n"
        }
        LengthAssessment::Good => "✅ **Good length!** Clear and focused.\n\n",
    });

    let mark = |found: bool| if found { "✅" } else { "❌" };
    message.push_str("**STAR Framework Check:**\n");
    message.push_str(&format!("{} Situation/Context\n", mark(review.star.situation)));
    message.push_str(&format!("{} Task/Responsibility\n", mark(review.star.task)));
    message.push_str(&format!("{} Action Taken\n", mark(review.star.action)));
    message.push_str(&format!("{} Result/Outcome\n\n", mark(review.star.result)));

    if review.star.is_complete() {
        message.push_str("🎉 **Great job!** You covered all STAR elements.");
    } else {
        message.push_str("💡 **Improve:** Try to include all four STAR elements for a complete answer.");
    }
    message
}

pub fn review_instructions() -> String {
    "📝 **Review Your Answer**\n\n\
     Type your answer after \"Review my answer:\" and I'll give you feedback."
        .to_string()
}

pub fn company_list() -> String {
    let mut message = String::from("🎯 **Company Tips Available for:**\n\n");
    for company in CompanyKey::ALL {
        message.push_str(&format!("• {}\n", company.display_name()));
    }
    message.push_str("\n_Type \"Company tips: [Company]\" for specific advice._");
    message
}

pub fn company_tips(company: &str, tips: CompanyTips) -> String {
    match tips {
        CompanyTips::Known(_) => {
            let mut message = format!("🎯 **Tips for {}**\n\n", capitalize(company));
            for (i, tip) in tips.tips().iter().enumerate() {
                message.push_str(&format!("{}. {}\n\n", i + 1, tip));
            }
            message
        }
        CompanyTips::Generic => {
            let mut message = format!(
                "⚠️ **No specific tips for \"{}\" yet.**\n\nHere are general tips:\n\n",
                company
            );
            let lines: Vec<String> = tips.tips().iter().map(|tip| format!("• {}", tip)).collect();
            message.push_str(&lines.join("\n"));
            message
        }
    }
}

pub fn history(entries: &[HistoryEntry]) -> String {
    if entries.is_empty() {
        return "📊 **No Interview History**\n\n*Start a mock interview with \"Start mock interview\".*"
            .to_string();
    }

    let mut message = format!("📊 **Interview History** ({} sessions)\n\n", entries.len());
    for (i, entry) in entries.iter().enumerate() {
        message.push_str(&format!("{}. **{}** - {}\n", i + 1, entry.company, entry.role));
        message.push_str(&format!(
            "   📅 {} | {} questions\n\n",
            entry.date, entry.questions_answered
        ));
    }
    message
}

pub fn submit_instructions() -> String {
    "💬 **Submit Your Answer**\n\n\
     Just reply to the current question with your answer!\n\
     _I'll record it and move to the next question._"
        .to_string()
}

pub fn help() -> String {
    "🎯 **Interview-Prep Commands**\n\n\
     • \"Start mock interview [for Company] as [Role]\"\n\
     • \"STAR method explain\"\n\
     • \"Behavioral questions\"\n\
     • \"Technical questions for [Role]\"\n\
     • \"Review my answer: [Your answer]\"\n\
     • \"Company tips: [Company]\"\n\
     • \"Interview history\""
        .to_string()
}

fn push_numbered(message: &mut String, items: &[String]) {
    for (i, item) in items.iter().enumerate() {
        message.push_str(&format!("{}. {}\n\n", i + 1, item));
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
