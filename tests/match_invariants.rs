use chrono::{DateTime, TimeZone, Utc};
use placement_core::engine::{MatchEngine, RuleScoreProvider, ScoreProvider};
use placement_core::profile::{Branch, JobRequirement, ProfileFeatures};
use placement_core::types::{JobId, ProfileId, SkillSet};

fn skills(tokens: &[&str]) -> SkillSet {
    SkillSet::from_tokens(tokens.iter().copied())
}

fn profile(
    id: &str,
    skill_list: &[&str],
    cgpa: f64,
    branch: Branch,
    years: u32,
    certs: &[&str],
) -> ProfileFeatures {
    ProfileFeatures::derive(
        ProfileId::new(id).unwrap(),
        skills(skill_list),
        cgpa,
        branch,
        years,
        skills(certs),
    )
    .unwrap()
}

fn job(
    id: &str,
    required: &[&str],
    preferred: &[&str],
    min_cgpa: f64,
    branches: &[Branch],
    min_years: u32,
) -> JobRequirement {
    JobRequirement::derive(
        JobId::new(id).unwrap(),
        skills(required),
        skills(preferred),
        min_cgpa,
        branches.iter().copied().collect(),
        min_years,
    )
    .unwrap()
}

fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).unwrap()
}

#[test]
fn invariant_scores_stay_within_bounds() {
    let engine = MatchEngine::default();

    let candidates = vec![
        profile("cand-1", &[], 0.0, Branch::Mech, 0, &[]),
        profile("cand-2", &["python", "sql", "react", "aws"], 10.0, Branch::Cse, 5, &["aws"]),
        profile("cand-3", &["autocad"], 5.5, Branch::Civil, 1, &[]),
    ];
    let openings = vec![
        job("job-1", &[], &[], 0.0, &[], 0),
        job(
            "job-2",
            &["python", "sql", "django", "react", "aws"],
            &["docker", "kubernetes"],
            9.5,
            &[Branch::Ece],
            5,
        ),
        job("job-3", &["structural design"], &["autocad"], 6.0, &[Branch::Civil], 2),
    ];

    for candidate in &candidates {
        for opening in &openings {
            let result = engine.score_at(candidate, opening, at(0));

            assert!(
                (0.0..=100.0).contains(&result.score),
                "score {} out of bounds for {} vs {}",
                result.score,
                candidate.id.as_str(),
                opening.id.as_str()
            );

            let b = &result.breakdown;
            for factor in [&b.skills, &b.academic, &b.branch, &b.experience, &b.certifications] {
                assert!((0.0..=1.0).contains(&factor.raw));
            }
        }
    }
}

#[test]
fn invariant_matched_required_skill_never_lowers_skills_score() {
    let provider = RuleScoreProvider::default();
    let candidate = profile("cand-1", &["python", "sql"], 8.0, Branch::Cse, 1, &[]);

    let narrow = job("job-1", &["python", "django"], &[], 7.0, &[], 0);
    let wider = job("job-2", &["python", "django", "sql"], &[], 7.0, &[], 0);

    let before = provider.evaluate(&candidate, &narrow).skills;
    let after = provider.evaluate(&candidate, &wider).skills;
    assert!(
        after >= before,
        "adding a held required skill dropped the sub-score: {before} -> {after}"
    );

    // The same holds when a preferred list shares the union.
    let narrow = job("job-3", &["python", "django"], &["aws"], 7.0, &[], 0);
    let wider = job("job-4", &["python", "django", "sql"], &["aws"], 7.0, &[], 0);

    let before = provider.evaluate(&candidate, &narrow).skills;
    let after = provider.evaluate(&candidate, &wider).skills;
    assert!(after >= before, "{before} -> {after}");

    // A fully covered union, preferred terms included, stays at 1.0 as
    // the required set widens into skills the candidate already holds.
    let broad = profile(
        "cand-2",
        &["python", "sql", "aws", "docker", "kubernetes", "linux"],
        8.0,
        Branch::Cse,
        1,
        &[],
    );
    let narrow = job("job-5", &["python"], &["aws", "docker", "kubernetes", "linux"], 7.0, &[], 0);
    let wider = job(
        "job-6",
        &["python", "sql"],
        &["aws", "docker", "kubernetes", "linux"],
        7.0,
        &[],
        0,
    );

    let before = provider.evaluate(&broad, &narrow).skills;
    let after = provider.evaluate(&broad, &wider).skills;
    assert!(
        after >= before,
        "adding a held required skill dropped a covered overlap: {before} -> {after}"
    );
    assert_eq!(before, 1.0);
    assert_eq!(after, 1.0);
}

#[test]
fn invariant_scoring_is_deterministic_for_a_fixed_timestamp() {
    let engine = MatchEngine::default();
    let candidate = profile("cand-1", &["python", "react"], 7.8, Branch::Cse, 1, &["aws"]);
    let opening = job("job-1", &["python", "django"], &["aws"], 7.0, &[Branch::Cse], 1);

    let first = engine.score_at(&candidate, &opening, at(42));
    let second = engine.score_at(&candidate, &opening, at(42));

    assert_eq!(first, second);
}

#[test]
fn invariant_breakdown_totals_are_clamped() {
    let engine = MatchEngine::default();
    let candidate = profile("cand-1", &["python"], 9.0, Branch::Cse, 3, &[]);
    let opening = job("job-1", &["python"], &[], 7.0, &[Branch::Cse], 0);

    let result = engine.score_at(&candidate, &opening, at(0));

    // Fully satisfied factors with the default weights sum to 100 after
    // clamping, never above it.
    assert_eq!(result.score, 100.0);
}
