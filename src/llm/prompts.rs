/// Build the summary prompt. The transcript is embedded verbatim.
pub fn build_summary_prompt(transcript: &str) -> String {
    format!(
        "Generate a concise summary of the following meeting transcript. \
Keep it between 100-150 words. Focus on key discussions, decisions, and next steps. \
Structure it with:\n\
- Meeting overview (1-2 sentences)\n\
- Main points discussed\n\
- Key decisions/outcomes\n\
- Any open questions\n\
\n\
Transcript:\n\
{transcript}"
    )
}

/// Build the follow-up email prompt from a summary. Never takes the transcript.
pub fn build_email_prompt(summary: &str) -> String {
    format!(
        "Write a professional follow-up email based on this meeting summary:\n\
\n\
{summary}\n\
\n\
The email should be concise, include action items, and have a professional tone."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRANSCRIPT: &str = "Alice: Let's ship v2 by Friday. Bob: agreed.";

    #[test]
    fn summary_prompt_embeds_transcript_verbatim() {
        let prompt = build_summary_prompt(TRANSCRIPT);
        assert!(prompt.contains(TRANSCRIPT));
        assert!(prompt.starts_with("Generate a concise summary of the following meeting transcript."));
        assert!(prompt.contains("Keep it between 100-150 words."));
        assert!(prompt.contains("- Meeting overview (1-2 sentences)"));
        assert!(prompt.contains("- Main points discussed"));
        assert!(prompt.contains("- Key decisions/outcomes"));
        assert!(prompt.contains("- Any open questions"));
        assert!(prompt.ends_with(&format!("Transcript:\n{TRANSCRIPT}")));
    }

    #[test]
    fn summary_prompt_passes_odd_input_through() {
        for transcript in ["", "{braces} and {{doubled}}", "line one\n\n\tline two  ", "émoji 🎉"] {
            let prompt = build_summary_prompt(transcript);
            assert!(prompt.ends_with(transcript));
        }
    }

    #[test]
    fn email_prompt_embeds_summary_only() {
        let summary = "Team agreed to ship v2 by Friday.";
        let prompt = build_email_prompt(summary);

        assert!(prompt.contains(summary));
        assert!(!prompt.contains(TRANSCRIPT));
        assert!(!prompt.contains("Alice:"));
        assert!(prompt.starts_with(
            "Write a professional follow-up email based on this meeting summary:"
        ));
        assert!(prompt.contains("include action items"));
    }

    #[test]
    fn prompts_are_deterministic() {
        assert_eq!(build_summary_prompt(TRANSCRIPT), build_summary_prompt(TRANSCRIPT));
        assert_eq!(build_email_prompt("x"), build_email_prompt("x"));
    }
}
