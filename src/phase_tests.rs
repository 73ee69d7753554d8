use super::{Phase, PhaseState, PENDING_STATUS, PHASES};

#[test]
fn identifiers_round_trip_through_parse() {
    for phase in PHASES {
        assert_eq!(Phase::parse(phase.as_str()), Some(phase));
    }
    assert_eq!(Phase::parse("bogus"), None);
    assert_eq!(Phase::parse("RESEARCH"), None);
    assert_eq!(Phase::parse(""), None);
}

#[test]
fn declaration_order_is_workflow_order() {
    let mut sorted = PHASES.to_vec();
    sorted.sort();
    assert_eq!(sorted, PHASES);
    assert!(Phase::Research < Phase::FeasibilityResearch);
    assert!(Phase::Analyze < Phase::Write);
}

#[test]
fn serde_uses_kebab_case_identifiers() {
    for phase in PHASES {
        let json = serde_json::to_string(&phase).expect("serialize phase");
        assert_eq!(json, format!("\"{}\"", phase.as_str()));
        let parsed: Phase = serde_json::from_str(&json).expect("parse phase");
        assert_eq!(parsed, phase);
    }
}

#[test]
fn titles_number_phases_in_workflow_order() {
    for (index, phase) in PHASES.iter().enumerate() {
        let title = phase.spec().title;
        assert!(
            title.starts_with(&format!("PHASE {}:", index + 1)),
            "unexpected title {title:?} for {phase}"
        );
    }
}

#[test]
fn checkpoints_sit_on_the_feasibility_phases() {
    let checkpointed: Vec<Phase> = PHASES
        .iter()
        .copied()
        .filter(|phase| phase.spec().checkpoint.is_some())
        .collect();
    assert_eq!(
        checkpointed,
        [Phase::FeasibilityResearch, Phase::FeasibilityData]
    );
}

#[test]
fn every_phase_names_a_skill_and_outputs() {
    for phase in PHASES {
        let spec = phase.spec();
        assert!(spec.skill.starts_with("skills/"), "{phase}");
        assert!(spec.skill.ends_with("/SKILL.md"), "{phase}");
        assert!(!spec.tasks.is_empty(), "{phase}");
        assert!(!spec.outputs.is_empty(), "{phase}");
        for output in spec.outputs {
            assert!(output.starts_with("outputs/"), "{phase}: {output}");
        }
    }
}

#[test]
fn pending_state_matches_initial_status() {
    assert_eq!(PhaseState::pending().status, PENDING_STATUS);
}
