//! Candidate-facing message templates.

/// Presentation settings shared by both specialists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageStyle {
    pub signature: String,
    pub assessment_time_limit_minutes: u32,
}

impl Default for MessageStyle {
    fn default() -> Self {
        Self {
            signature: "RecruitEM Team".into(),
            assessment_time_limit_minutes: 60,
        }
    }
}

impl MessageStyle {
    pub fn assessment(&self, candidate_name: &str, job_title: &str, link: &str) -> String {
        format!(
            "Hi {candidate_name}!\n\n\
             Great news! You've been selected to move forward with the {job_title} position.\n\n\
             Next Step: Please complete your technical assessment at your earliest convenience.\n\n\
             → Assessment Link: {link}\n\
             → Time Limit: {minutes} minutes\n\
             → Tip: Review the job description before starting\n\n\
             Best of luck!\n\
             {signature}",
            minutes = self.assessment_time_limit_minutes,
            signature = self.signature,
        )
    }

    pub fn interview(&self, candidate_name: &str, job_title: &str, tip: &str, context: &str) -> String {
        format!(
            "Hi {candidate_name}!\n\n\
             Congratulations on reaching the interview stage for {job_title}!\n\n\
             → Your interview is coming up soon. Here's a personalized tip to help you prepare:\n\n\
             → Key Focus Area:\n\
             {tip}\n\n\
             → Role Context:\n\
             {context}\n\n\
             Remember: Prepare specific examples from your experience that demonstrate these skills.\n\n\
             You've got this!\n\
             {signature}",
            signature = self.signature,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assessment_layout() {
        let msg = MessageStyle::default().assessment(
            "Alice Chen",
            "Python Developer",
            "https://assess.example.com/python",
        );
        assert!(msg.starts_with("Hi Alice Chen!\n\nGreat news!"));
        assert!(msg.contains("with the Python Developer position."));
        assert!(msg.contains("→ Assessment Link: https://assess.example.com/python\n"));
        assert!(msg.contains("→ Time Limit: 60 minutes\n"));
        assert!(msg.ends_with("Best of luck!\nRecruitEM Team"));
    }

    #[test]
    fn interview_layout() {
        let msg = MessageStyle::default().interview("Bob", "Data Analyst", "TIP", "CTX");
        assert!(msg.starts_with("Hi Bob!\n\nCongratulations on reaching the interview stage for Data Analyst!"));
        assert!(msg.contains("→ Key Focus Area:\nTIP\n\n→ Role Context:\nCTX\n\n"));
        assert!(msg.ends_with("You've got this!\nRecruitEM Team"));
    }

    #[test]
    fn custom_style() {
        let style = MessageStyle {
            signature: "Acme Talent".into(),
            assessment_time_limit_minutes: 90,
        };
        let msg = style.assessment("A", "B", "C");
        assert!(msg.contains("90 minutes"));
        assert!(msg.ends_with("Acme Talent"));
    }

    #[test]
    fn empty_inputs_still_produce_text() {
        let style = MessageStyle::default();
        assert!(!style.assessment("", "", "").trim().is_empty());
        assert!(!style.interview("", "", "", "").trim().is_empty());
    }
}
