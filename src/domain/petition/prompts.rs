//! Deterministic prompt assembly for the generation collaborator.
//!
//! Every prompt is a pure function of workflow state: same state, same
//! string. The cover letter and each reference letter carry the full
//! background dump so the collaborator needs no other context.

use std::fmt::Write;

use super::{ProfessionalBackground, RecommenderInfo};

/// Formats the background summary sent to the endeavor suggestion engine.
pub fn background_summary(bg: &ProfessionalBackground) -> String {
    format!(
        "Name: {}\n\
         Field: {}\n\
         Degree: {}\n\
         Experience: {} years\n\
         Achievements: {}\n\
         Publications: {}\n\
         Awards: {}\n\
         Position: {}\n\
         Research Focus: {}",
        bg.full_name,
        bg.field,
        bg.degree,
        opt(bg.experience_years),
        bg.achievements,
        opt(bg.publications_count),
        bg.awards,
        bg.current_position,
        bg.research_focus,
    )
}

/// Flattened key/value dump of every background field, one per line.
pub fn background_dump(bg: &ProfessionalBackground) -> String {
    format!(
        "full_name: {}\n\
         field: {}\n\
         degree: {}\n\
         experience_years: {}\n\
         achievements: {}\n\
         publications_count: {}\n\
         awards: {}\n\
         current_position: {}\n\
         research_focus: {}",
        bg.full_name,
        bg.field,
        bg.degree,
        opt(bg.experience_years),
        bg.achievements,
        opt(bg.publications_count),
        bg.awards,
        bg.current_position,
        bg.research_focus,
    )
}

/// Builds the full cover-letter prompt from the background and the
/// selected endeavors/arguments (numbered from 1, in suggestion order).
pub fn cover_letter(
    bg: &ProfessionalBackground,
    selected_endeavors: &[&str],
    selected_arguments: &[&str],
) -> String {
    let mut prompt = format!(
        "Generate a complete EB-2 NIW I-140 petition cover letter for {}.\n\n",
        bg.full_name
    );

    let _ = write!(
        prompt,
        "Professional Background:\n{}\n\n",
        background_dump(bg)
    );
    let _ = write!(
        prompt,
        "Selected Proposed Endeavors:\n{}\n\n",
        numbered(selected_endeavors)
    );
    let _ = write!(
        prompt,
        "Selected National Interest Arguments:\n{}\n\n",
        numbered(selected_arguments)
    );

    prompt.push_str(
        "Generate a COMPLETE, comprehensive EB-2 NIW cover letter following this structure:\n\n\
         1. Introduction (who petitioner is, what they're requesting)\n\
         2. Proposed Endeavor (detailed description of the specific endeavor)\n\
         3. Prong 1: Substantial Merit and National Importance (minimum 3 paragraphs)\n\
         4. Prong 2: Well Positioned to Advance the Endeavor (minimum 3 paragraphs with evidence)\n\
         5. Prong 3: Balance of Interests - waiving labor certification (minimum 2 paragraphs)\n\
         6. Conclusion (strong closing statement)\n\n\
         IMPORTANT:\n\
         - Generate the ENTIRE letter, do NOT stop mid-sentence\n\
         - Use specific details, numbers, and achievements from the professional background\n\
         - Each section must be fully developed with evidence\n\
         - Write in a professional, persuasive tone suitable for USCIS adjudication\n\
         - Minimum 6-8 pages of content\n\
         - End with a complete conclusion paragraph\n\n\
         Do NOT use placeholders. Generate the complete, submission-ready letter.",
    );

    prompt
}

/// Builds the revision prompt: verbatim feedback plus the full current
/// draft, asking for a complete replacement document.
pub fn revision(feedback: &str, current_draft: &str) -> String {
    format!(
        "Revise the following EB-2 NIW cover letter based on this feedback: \"{}\"\n\n\
         Current Cover Letter:\n{}\n\n\
         Generate the revised version maintaining the same structure but incorporating \
         the requested changes.",
        feedback, current_draft
    )
}

/// Builds one reference-letter prompt for a single recommender.
pub fn reference_letter(bg: &ProfessionalBackground, recommender: &RecommenderInfo) -> String {
    format!(
        "Generate a professional reference letter for {}'s EB-2 NIW petition.\n\n\
         Recommender Details:\n\
         Name: {}\n\
         Position: {}\n\
         Institution: {}\n\
         Relationship: {}\n\
         Focus Area: {}\n\n\
         Petitioner Background:\n{}\n\n\
         Generate a compelling, authentic reference letter that:\n\
         1. Introduces the recommender and their credentials\n\
         2. Explains how they know the petitioner\n\
         3. Discusses specific achievements and contributions they've witnessed\n\
         4. Emphasizes the petitioner's impact in their field\n\
         5. Provides a strong, unequivocal recommendation\n\n\
         The letter should sound personal and authentic to the recommender, not generic. \
         Length: 2-3 pages.",
        bg.full_name,
        recommender.name,
        recommender.position,
        recommender.institution,
        recommender.relationship,
        recommender.focus,
        background_dump(bg),
    )
}

fn numbered(items: &[&str]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item))
        .collect::<Vec<_>>()
        .join("\n")
}

fn opt(value: Option<u32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> ProfessionalBackground {
        ProfessionalBackground {
            full_name: "Jane Doe".to_string(),
            field: "AI".to_string(),
            degree: "PhD".to_string(),
            experience_years: Some(10),
            achievements: "Deployed diagnostic models".to_string(),
            publications_count: Some(15),
            awards: "NSF CAREER".to_string(),
            current_position: "Research Lead".to_string(),
            research_focus: "Clinical ML".to_string(),
        }
    }

    #[test]
    fn summary_interpolates_every_field() {
        let summary = background_summary(&jane());
        assert!(summary.contains("Name: Jane Doe"));
        assert!(summary.contains("Experience: 10 years"));
        assert!(summary.contains("Publications: 15"));
        assert!(summary.contains("Research Focus: Clinical ML"));
    }

    #[test]
    fn summary_renders_missing_numbers_as_empty() {
        let mut bg = jane();
        bg.experience_years = None;
        bg.publications_count = None;
        let summary = background_summary(&bg);
        assert!(summary.contains("Experience:  years"));
        assert!(summary.contains("Publications: \n"));
    }

    #[test]
    fn cover_letter_numbers_selections_from_one() {
        let prompt = cover_letter(
            &jane(),
            &["Advance clinical ML"],
            &["Cost reduction", "Research leadership", "Care access"],
        );
        assert!(prompt.contains("Jane Doe"));
        assert!(prompt.contains("1. Advance clinical ML"));
        assert!(prompt.contains("1. Cost reduction"));
        assert!(prompt.contains("2. Research leadership"));
        assert!(prompt.contains("3. Care access"));
    }

    #[test]
    fn cover_letter_includes_outline_and_completeness_instruction() {
        let prompt = cover_letter(&jane(), &["E"], &["A"]);
        assert!(prompt.contains("Prong 1: Substantial Merit and National Importance"));
        assert!(prompt.contains("Prong 2: Well Positioned to Advance the Endeavor"));
        assert!(prompt.contains("Prong 3: Balance of Interests"));
        assert!(prompt.contains("Do NOT use placeholders"));
    }

    #[test]
    fn cover_letter_is_deterministic() {
        let a = cover_letter(&jane(), &["E1", "E2"], &["A1"]);
        let b = cover_letter(&jane(), &["E1", "E2"], &["A1"]);
        assert_eq!(a, b);
    }

    #[test]
    fn revision_restates_feedback_and_full_draft() {
        let prompt = revision("Strengthen the introduction", "Dear Officer, ...");
        assert!(prompt.contains("\"Strengthen the introduction\""));
        assert!(prompt.contains("Current Cover Letter:\nDear Officer, ..."));
        assert!(prompt.contains("revised version"));
    }

    #[test]
    fn reference_letter_embeds_recommender_and_background() {
        let recommender = RecommenderInfo {
            name: "Dr. Grant".to_string(),
            position: "Professor".to_string(),
            institution: "Montana State".to_string(),
            relationship: "PhD advisor".to_string(),
            focus: "Research collaboration".to_string(),
        };
        let prompt = reference_letter(&jane(), &recommender);
        assert!(prompt.contains("Jane Doe's EB-2 NIW petition"));
        assert!(prompt.contains("Name: Dr. Grant"));
        assert!(prompt.contains("Relationship: PhD advisor"));
        assert!(prompt.contains("full_name: Jane Doe"));
        assert!(prompt.contains("Length: 2-3 pages"));
    }
}
