#[cfg(test)]
mod electric_terrain_tests {
    use battler_ai_field_effects::{
        FieldEffectContext,
        FieldEffectOptions,
        Verdict,
        check_field_status_benefit,
        field_status_verdict,
    };
    use battler_data::{
        AdditionalEffect,
        BattleType,
        FieldStatus,
    };
    use battler_state::{
        BattlerRef,
        FieldSnapshot,
    };
    use battler_test_utils::{
        TestFieldBuilder,
        mon,
        static_local_data_store,
    };

    fn verdict(field: &FieldSnapshot, battler: BattlerRef) -> Verdict {
        let options = FieldEffectOptions::default();
        let context = FieldEffectContext::new(static_local_data_store(), field, &options).unwrap();
        field_status_verdict(&context, battler, FieldStatus::ElectricTerrain)
    }

    const SNORLAX: &str = r#"{ "name": "Snorlax", "moves": ["Tackle"] }"#;

    fn singles(mon_json: &str, foe_json: &str) -> TestFieldBuilder {
        TestFieldBuilder::new()
            .add_mon_to_side_1(mon(mon_json))
            .add_mon_to_side_2(mon(foe_json))
    }

    #[test]
    fn terrain_abilities_and_moves_benefit() {
        let field = singles(r#"{ "name": "Raichu", "ability": "Surge Surfer" }"#, SNORLAX).build();
        assert_eq!(verdict(&field, BattlerRef::new(0, 0)), Verdict::Positive);

        let field = singles(
            r#"{ "name": "Magnezone", "grounded": false, "moves": ["Rising Voltage"] }"#,
            SNORLAX,
        )
        .build();
        assert_eq!(verdict(&field, BattlerRef::new(0, 0)), Verdict::Positive);
    }

    #[test]
    fn grounded_electric_attacker_benefits() {
        let field = singles(r#"{ "name": "Pikachu", "moves": ["Thunderbolt"] }"#, SNORLAX).build();
        assert_eq!(verdict(&field, BattlerRef::new(0, 0)), Verdict::Positive);

        let field = singles(
            r#"{ "name": "Rotom", "grounded": false, "moves": ["Thunderbolt"] }"#,
            SNORLAX,
        )
        .build();
        assert_eq!(verdict(&field, BattlerRef::new(0, 0)), Verdict::Neutral);
    }

    #[test]
    fn status_electric_move_does_not_benefit() {
        let field = singles(r#"{ "name": "Jolteon", "moves": ["Thunder Wave"] }"#, SNORLAX).build();
        assert_eq!(verdict(&field, BattlerRef::new(0, 0)), Verdict::Neutral);
    }

    #[test]
    fn grounded_foe_using_rest_benefits() {
        let field = singles(
            SNORLAX,
            r#"{ "name": "Snorlax", "moves": ["Rest", "Tackle"] }"#,
        )
        .build();
        assert_eq!(verdict(&field, BattlerRef::new(0, 0)), Verdict::Positive);

        let field = singles(
            SNORLAX,
            r#"{ "name": "Gyarados", "grounded": false, "moves": ["Rest"] }"#,
        )
        .build();
        assert_eq!(verdict(&field, BattlerRef::new(0, 0)), Verdict::Neutral);
    }

    #[test]
    fn grounded_mon_benefits_when_foe_side_inflicts_sleep() {
        let field = singles(SNORLAX, r#"{ "name": "Breloom" }"#)
            .with_used_additional_effect(1, AdditionalEffect::Sleep)
            .build();
        assert_eq!(verdict(&field, BattlerRef::new(0, 0)), Verdict::Positive);

        let field = singles(
            r#"{ "name": "Gyarados", "grounded": false, "moves": ["Tackle"] }"#,
            r#"{ "name": "Breloom" }"#,
        )
        .with_used_additional_effect(1, AdditionalEffect::Sleep)
        .build();
        assert_eq!(verdict(&field, BattlerRef::new(0, 0)), Verdict::Neutral);

        let field = singles(SNORLAX, r#"{ "name": "Breloom" }"#)
            .with_used_additional_effect(0, AdditionalEffect::Sleep)
            .build();
        assert_eq!(verdict(&field, BattlerRef::new(0, 0)), Verdict::Neutral);
    }

    #[test]
    fn sleeping_or_drowsy_grounded_mon_benefits() {
        let field = singles(
            r#"{ "name": "Snorlax", "status": "Sleep", "moves": ["Tackle"] }"#,
            SNORLAX,
        )
        .build();
        assert_eq!(verdict(&field, BattlerRef::new(0, 0)), Verdict::Positive);

        let field = singles(
            r#"{ "name": "Snorlax", "drowsy": true, "moves": ["Tackle"] }"#,
            SNORLAX,
        )
        .build();
        assert_eq!(verdict(&field, BattlerRef::new(0, 0)), Verdict::Positive);
    }

    #[test]
    fn partner_with_terrain_move_benefits_side() {
        let field = TestFieldBuilder::new()
            .with_battle_type(BattleType::Doubles)
            .add_mon_to_side_1(mon(
                r#"{ "name": "Gyarados", "grounded": false, "moves": ["Tackle"] }"#,
            ))
            .add_mon_to_side_1(mon(
                r#"{ "name": "Magnezone", "grounded": false, "moves": ["Rising Voltage"] }"#,
            ))
            .add_mon_to_side_2(mon(SNORLAX))
            .add_mon_to_side_2(mon(SNORLAX))
            .build();
        let options = FieldEffectOptions::default();
        let context = FieldEffectContext::new(static_local_data_store(), &field, &options).unwrap();
        assert!(check_field_status_benefit(
            &context,
            BattlerRef::new(0, 0),
            FieldStatus::ElectricTerrain,
            Verdict::Positive,
        ));
    }

    #[test]
    fn partner_with_terrain_ability_benefits_side() {
        let field = TestFieldBuilder::new()
            .with_battle_type(BattleType::Doubles)
            .add_mon_to_side_1(mon(
                r#"{ "name": "Gyarados", "grounded": false, "moves": ["Tackle"] }"#,
            ))
            .add_mon_to_side_1(mon(r#"{ "name": "Iron Hands", "ability": "Quark Drive" }"#))
            .add_mon_to_side_2(mon(SNORLAX))
            .add_mon_to_side_2(mon(SNORLAX))
            .build();
        assert_eq!(verdict(&field, BattlerRef::new(0, 0)), Verdict::Positive);
    }

    #[test]
    fn no_benefit_without_partner() {
        let field = TestFieldBuilder::new()
            .with_battle_type(BattleType::Doubles)
            .add_mon_to_side_1(mon(
                r#"{ "name": "Gyarados", "grounded": false, "moves": ["Tackle"] }"#,
            ))
            .add_mon_to_side_1(mon(
                r#"{ "name": "Magnezone", "fainted": true, "moves": ["Rising Voltage"] }"#,
            ))
            .add_mon_to_side_2(mon(SNORLAX))
            .build();
        assert_eq!(verdict(&field, BattlerRef::new(0, 0)), Verdict::Neutral);
    }
}
