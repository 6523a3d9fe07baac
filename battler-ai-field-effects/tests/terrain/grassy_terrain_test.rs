#[cfg(test)]
mod grassy_terrain_tests {
    use battler_ai_field_effects::{
        FieldEffectContext,
        FieldEffectOptions,
        Verdict,
        field_status_verdict,
    };
    use battler_data::{
        AdditionalEffect,
        BattleType,
        FieldStatus,
        MoveEffect,
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
        field_status_verdict(&context, battler, FieldStatus::GrassyTerrain)
    }

    const SNORLAX: &str = r#"{ "name": "Snorlax", "moves": ["Tackle"] }"#;

    fn singles(mon_json: &str) -> TestFieldBuilder {
        TestFieldBuilder::new()
            .add_mon_to_side_1(mon(mon_json))
            .add_mon_to_side_2(mon(SNORLAX))
    }

    #[test]
    fn grass_pelt_benefits() {
        let field = singles(r#"{ "name": "Gogoat", "ability": "Grass Pelt" }"#).build();
        assert_eq!(verdict(&field, BattlerRef::new(0, 0)), Verdict::Positive);
    }

    #[test]
    fn grassy_glide_benefits() {
        let field = singles(
            r#"{ "name": "Rillaboom", "grounded": false, "moves": ["Grassy Glide"] }"#,
        )
        .build();
        assert_eq!(verdict(&field, BattlerRef::new(0, 0)), Verdict::Positive);
    }

    #[test]
    fn floral_healing_user_benefits() {
        let field = singles(SNORLAX)
            .with_used_additional_effect(0, AdditionalEffect::FloralHealing)
            .build();
        assert_eq!(verdict(&field, BattlerRef::new(0, 0)), Verdict::Positive);

        let field = singles(SNORLAX)
            .with_used_additional_effect(1, AdditionalEffect::FloralHealing)
            .build();
        assert_eq!(verdict(&field, BattlerRef::new(0, 0)), Verdict::Neutral);
    }

    #[test]
    fn grounded_mon_benefits_against_ground_shaking_moves() {
        let field = singles(SNORLAX)
            .with_used_move_effect(1, MoveEffect::Earthquake)
            .build();
        assert_eq!(verdict(&field, BattlerRef::new(0, 0)), Verdict::Positive);

        let field = singles(SNORLAX)
            .with_used_move_effect(1, MoveEffect::Magnitude)
            .build();
        assert_eq!(verdict(&field, BattlerRef::new(0, 0)), Verdict::Positive);

        let field = singles(r#"{ "name": "Gyarados", "grounded": false }"#)
            .with_used_move_effect(1, MoveEffect::Earthquake)
            .build();
        assert_eq!(verdict(&field, BattlerRef::new(0, 0)), Verdict::Neutral);
    }

    #[test]
    fn grounded_grass_attacker_benefits() {
        let field = singles(r#"{ "name": "Venusaur", "moves": ["Energy Ball"] }"#).build();
        assert_eq!(verdict(&field, BattlerRef::new(0, 0)), Verdict::Positive);

        let field = singles(
            r#"{ "name": "Tropius", "grounded": false, "moves": ["Energy Ball"] }"#,
        )
        .build();
        assert_eq!(verdict(&field, BattlerRef::new(0, 0)), Verdict::Neutral);

        let field = singles(r#"{ "name": "Venusaur", "moves": ["Sleep Powder"] }"#).build();
        assert_eq!(verdict(&field, BattlerRef::new(0, 0)), Verdict::Neutral);
    }

    #[test]
    fn partner_grassy_glide_benefits_side() {
        let field = TestFieldBuilder::new()
            .with_battle_type(BattleType::Doubles)
            .add_mon_to_side_1(mon(r#"{ "name": "Gyarados", "grounded": false }"#))
            .add_mon_to_side_1(mon(r#"{ "name": "Rillaboom", "moves": ["Grassy Glide"] }"#))
            .add_mon_to_side_2(mon(SNORLAX))
            .add_mon_to_side_2(mon(SNORLAX))
            .build();
        assert_eq!(verdict(&field, BattlerRef::new(0, 0)), Verdict::Positive);
    }
}
