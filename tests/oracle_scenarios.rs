use oracle_infer::{
    AbilityKind, Action, Amount, ChosenType, DetectAllResult, ManaSymbol, REMINDER_NOTE,
    TargetScope, TokenAbilityDefinition, action_lines, detect_all, infer_actions_from_text,
    parse_oracle, scan_reminder_token_abilities,
};

#[test]
fn colorless_mana_ability() {
    assert_eq!(
        infer_actions_from_text("Add {C}."),
        vec![Action::AddMana {
            symbols: vec![ManaSymbol::Colorless]
        }]
    );
}

#[test]
fn pump_until_end_of_turn() {
    assert_eq!(
        infer_actions_from_text("Target creature gets +2/+2 until end of turn."),
        vec![Action::PtMod {
            power: 2,
            toughness: 2,
            target: TargetScope::TargetCreature,
            until_eot: true,
            template: None,
        }]
    );
}

#[test]
fn damage_to_any_target() {
    let actions = infer_actions_from_text("This creature deals 3 damage to any target.");
    assert!(actions.contains(&Action::DealDamage {
        amount: Amount::Fixed(3),
        target: TargetScope::AnyTarget,
    }));
}

#[test]
fn clue_reminder_definition() {
    assert_eq!(
        scan_reminder_token_abilities(
            "(Clue tokens are artifacts with \"{2}, Sacrifice this artifact: Draw a card.\")"
        ),
        vec![TokenAbilityDefinition {
            token: "Clue".to_string(),
            cost: "{2}, Sacrifice this artifact".to_string(),
            effect: "Draw a card".to_string(),
        }]
    );
}

#[test]
fn enters_trigger_draws() {
    let abilities = parse_oracle("When this creature enters, draw a card.");
    assert_eq!(abilities.len(), 1);
    assert_eq!(abilities[0].kind, AbilityKind::Triggered);
    assert_eq!(abilities[0].cost, None);
    assert_eq!(abilities[0].effect, "draw a card.");
    assert_eq!(
        abilities[0].actions(),
        vec![Action::DrawCards {
            amount: Amount::ONE,
            target: TargetScope::Unspecified,
        }]
    );
}

#[test]
fn empty_effect_is_reminder_note() {
    assert_eq!(infer_actions_from_text(""), vec![Action::note(REMINDER_NOTE)]);
}

#[test]
fn empty_text_detects_nothing() {
    let result = detect_all("");
    assert_eq!(result, DetectAllResult::default());
    assert!(result.is_empty());
}

#[test]
fn investigate_card_end_to_end() {
    let text = "When this creature enters, investigate. (To investigate, create a Clue token. It's an artifact with \"{2}, Sacrifice this artifact: Draw a card.\")\n{1}{G}, {T}: Put a +1/+1 counter on target creature you control.";
    let result = detect_all(text);

    assert_eq!(result.abilities_only.len(), 2);
    assert_eq!(result.abilities_only[0].kind, AbilityKind::Triggered);
    assert_eq!(result.abilities_only[1].kind, AbilityKind::Activated);
    assert_eq!(
        result.abilities_only[1].cost.as_deref(),
        Some("{1}{G}, {T}")
    );

    assert_eq!(
        result.abilities_only[0].actions(),
        vec![Action::CreateTokens {
            amount: Amount::ONE,
            token: "Clue".to_string(),
        }]
    );
    assert_eq!(
        result.abilities_only[1].actions(),
        vec![Action::PutCounters {
            counter: Some("+1/+1".to_string()),
            amount: Amount::ONE,
            target: TargetScope::TargetCreatureYouControl,
        }]
    );
}

#[test]
fn lord_renders_with_callers_chosen_type() {
    let actions =
        infer_actions_from_text("Other creatures you control of the chosen type get +1/+1.");
    let elves = ChosenType::new("Elf");
    let goblins = ChosenType::new("Goblin");
    assert_eq!(actions.len(), 2);
    assert_eq!(
        action_lines(&actions, &elves),
        vec![
            "1. Other Elf creatures you control get +1/+1",
            "2. Other Elf creatures you control get +1/+1",
        ]
    );
    assert_eq!(
        action_lines(&actions, &goblins)[1],
        "2. Other Goblin creatures you control get +1/+1"
    );
}

#[test]
fn treasure_per_token_is_not_an_either_choice() {
    let actions = infer_actions_from_text(
        "Create a Treasure token for each artifact or enchantment token you control.",
    );
    assert!(!actions.iter().any(|action| matches!(action, Action::Choice { .. })));
    assert!(actions.contains(&Action::CreateTokens {
        amount: Amount::ONE,
        token: "Treasure".to_string(),
    }));
}

#[test]
fn keyword_choice_list() {
    let actions = infer_actions_from_text(
        "This creature gains your choice of flying, first strike, or swampwalk until end of turn.",
    );
    let [Action::Choice { options }] = actions.as_slice() else {
        panic!("expected a single choice, got {actions:?}");
    };
    assert_eq!(options.len(), 3);
    assert_eq!(options[2], Action::note("swampwalk"));
}
