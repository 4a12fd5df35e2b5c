use placement_core::extract::{extract, SkillVocabulary, UnextractedField};

fn vocab() -> SkillVocabulary {
    SkillVocabulary::builtin()
}

#[test]
fn test_extracts_skills_from_resume_text() {
    let text = "Final year student. Skills: Python, JavaScript, React, SQL, \
                Machine Learning. CGPA: 8.45. Email: priya.sharma@example.com. \
                Phone: 9876543210. 2 years of internship experience.";

    let profile = extract(text, &vocab());

    for skill in ["python", "javascript", "react", "sql", "machine learning"] {
        assert!(profile.skills.contains(skill), "missing skill: {skill}");
    }
    assert_eq!(profile.cgpa, Some(8.45));
    assert_eq!(profile.experience_years, Some(2));
    assert_eq!(profile.email.as_deref(), Some("priya.sharma@example.com"));
    assert_eq!(profile.phone.as_deref(), Some("9876543210"));
    assert!(profile.unextracted.is_empty());
}

#[test]
fn test_word_boundaries_block_substring_matches() {
    let profile = extract("Expert in javascript and django applications", &vocab());

    assert!(profile.skills.contains("javascript"));
    assert!(profile.skills.contains("django"));
    // "java" only appears inside "javascript", "go" only inside "django".
    assert!(!profile.skills.contains("java"));
    assert!(!profile.skills.contains("go"));
}

#[test]
fn test_symbol_terms_match_at_boundaries() {
    let profile = extract("Languages: C, C++ and Python", &vocab());

    assert!(profile.skills.contains("c"));
    assert!(profile.skills.contains("c++"));
    assert!(profile.skills.contains("python"));
}

#[test]
fn test_aliases_collapse_to_canonical_terms() {
    let profile = extract("Worked with JS, py, k8s, postgres and AI", &vocab());

    assert!(profile.skills.contains("javascript"));
    assert!(profile.skills.contains("python"));
    assert!(profile.skills.contains("kubernetes"));
    assert!(profile.skills.contains("postgresql"));
    assert!(profile.skills.contains("machine learning"));
    // The variant spellings themselves never appear in the output.
    assert!(!profile.skills.contains("js"));
    assert!(!profile.skills.contains("k8s"));
}

#[test]
fn test_multiword_terms_match_across_line_breaks() {
    let profile = extract("experienced in machine\nlearning and data\nanalysis", &vocab());

    assert!(profile.skills.contains("machine learning"));
    assert!(profile.skills.contains("data analysis"));
}

#[test]
fn test_accented_words_stay_whole_at_boundaries() {
    let profile = extract("Polishing my résumé for campus placements", &vocab());

    // "r" must not match inside "résumé"; é continues the word.
    assert!(profile.skills.is_empty());
}

#[test]
fn test_multibyte_vocabulary_terms_scan_cleanly() {
    let vocabulary = SkillVocabulary::new(["énergie"], &[]);

    // Embedded occurrence is rejected and the rescan resumes on a char
    // boundary.
    let embedded = extract("works on bioénergie systems", &vocabulary);
    assert!(embedded.skills.is_empty());

    let standalone = extract("énergie storage research", &vocabulary);
    assert!(standalone.skills.contains("énergie"));
}

#[test]
fn test_cgpa_keyword_first_beats_out_of_ten() {
    let profile = extract("scored 9.1/10 overall, cgpa 8.7", &vocab());
    assert_eq!(profile.cgpa, Some(8.7));
}

#[test]
fn test_cgpa_value_before_keyword() {
    let profile = extract("8.2 CGPA holder from the 2024 batch", &vocab());
    assert_eq!(profile.cgpa, Some(8.2));
}

#[test]
fn test_cgpa_out_of_ten_fallback() {
    let profile = extract("secured a grade of 7.8/10 in the final year", &vocab());
    assert_eq!(profile.cgpa, Some(7.8));
}

#[test]
fn test_cgpa_separator_variants() {
    assert_eq!(extract("CGPA: 8.5", &vocab()).cgpa, Some(8.5));
    assert_eq!(extract("CGPA - 8.5", &vocab()).cgpa, Some(8.5));
    assert_eq!(extract("cgpa of 8.5", &vocab()).cgpa, Some(8.5));
    assert_eq!(extract("GPA is 8.5", &vocab()).cgpa, Some(8.5));
    assert_eq!(extract("cgpa 9", &vocab()).cgpa, Some(9.0));
}

#[test]
fn test_cgpa_clamped_to_grading_scale() {
    let profile = extract("cgpa: 11.2 (typo)", &vocab());
    assert_eq!(profile.cgpa, Some(10.0));
}

#[test]
fn test_experience_forms() {
    assert_eq!(extract("3 years of backend work", &vocab()).experience_years, Some(3));
    assert_eq!(extract("5+ years experience", &vocab()).experience_years, Some(5));
    assert_eq!(extract("1 yr internship", &vocab()).experience_years, Some(1));
    // Fractional years truncate to the whole part.
    assert_eq!(extract("2.5 years in QA", &vocab()).experience_years, Some(2));
}

#[test]
fn test_phone_grouping_variants() {
    assert_eq!(
        extract("reach me at 987-654-3210", &vocab()).phone.as_deref(),
        Some("987-654-3210")
    );
    assert_eq!(
        extract("mobile: 98765 43210", &vocab()).phone.as_deref(),
        Some("98765 43210")
    );
    // Country code glued to the number only matches the +91 rule.
    assert_eq!(
        extract("call +919876543210 anytime", &vocab()).phone.as_deref(),
        Some("+919876543210")
    );
    // With a separator the bare ten-digit rule wins; rules apply in order.
    assert_eq!(
        extract("call +91-9876543210 anytime", &vocab()).phone.as_deref(),
        Some("9876543210")
    );
}

#[test]
fn test_empty_text_reports_every_gap() {
    let profile = extract("", &vocab());

    assert!(profile.skills.is_empty());
    assert_eq!(profile.cgpa, None);
    assert_eq!(profile.experience_years, None);
    assert_eq!(profile.email, None);
    assert_eq!(profile.phone, None);
    assert_eq!(
        profile.unextracted,
        vec![
            UnextractedField::Skills,
            UnextractedField::Cgpa,
            UnextractedField::ExperienceYears,
            UnextractedField::Email,
            UnextractedField::Phone,
        ]
    );
}

#[test]
fn test_gaps_are_partial() {
    let profile = extract("python developer, cgpa 8.0", &vocab());

    assert!(profile.skills.contains("python"));
    assert_eq!(profile.cgpa, Some(8.0));
    assert_eq!(
        profile.unextracted,
        vec![
            UnextractedField::ExperienceYears,
            UnextractedField::Email,
            UnextractedField::Phone,
        ]
    );
}

#[test]
fn invariant_extraction_is_deterministic() {
    let text = "Skills: Python, React, SQL. CGPA: 8.1. 1 year experience. \
                Contact: dev@example.com, 9123456780.";
    let vocabulary = vocab();

    let first = extract(text, &vocabulary);
    let second = extract(text, &vocabulary);

    assert_eq!(first, second);
}

#[test]
fn test_canonicalize_exact_alias_then_fuzzy() {
    let vocabulary = vocab();

    // Exact member wins untouched.
    assert_eq!(vocabulary.canonicalize("Python"), "python");
    // Alias table maps variant spellings.
    assert_eq!(vocabulary.canonicalize("NodeJS"), "node.js");
    assert_eq!(vocabulary.canonicalize("Artificial Intelligence"), "machine learning");
    // One edit away resolves through the fuzzy fallback.
    assert_eq!(vocabulary.canonicalize("pyhton"), "python");
    assert_eq!(vocabulary.canonicalize("javascipt"), "javascript");
}

#[test]
fn test_fuzzy_never_touches_short_tokens() {
    let vocabulary = vocab();

    // Below five characters a typo could collapse distinct languages,
    // so unknown short tokens normalize to themselves.
    assert_eq!(vocabulary.canonicalize("jva"), "jva");
    assert_eq!(vocabulary.canonicalize("rus"), "rus");
}

#[test]
fn test_unknown_tokens_survive_normalization() {
    let vocabulary = vocab();
    let skills = vocabulary.normalize(["Python", "underwater basket weaving"]);

    assert!(skills.contains("python"));
    assert!(skills.contains("underwater basket weaving"));
}

#[test]
fn invariant_vocabulary_version_pins_term_order() {
    let a = SkillVocabulary::new(["python", "java"], &[]);
    let b = SkillVocabulary::new(["python", "java"], &[]);
    let reordered = SkillVocabulary::new(["java", "python"], &[]);
    let aliased = SkillVocabulary::new(["python", "java"], &[("py", "python")]);

    assert_eq!(a.version(), b.version());
    assert_ne!(a.version(), reordered.version());
    assert_ne!(a.version(), aliased.version());
}

#[test]
fn test_vocabulary_drops_duplicate_terms() {
    let vocabulary = SkillVocabulary::new(["python", "Python", "java", "python"], &[]);

    assert_eq!(vocabulary.len(), 2);
    assert_eq!(vocabulary.position("python"), Some(0));
    assert_eq!(vocabulary.position("java"), Some(1));
}
