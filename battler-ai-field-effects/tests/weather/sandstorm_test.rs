#[cfg(test)]
mod sandstorm_tests {
    use battler_ai_field_effects::{
        FieldEffectContext,
        FieldEffectOptions,
        Verdict,
        check_weather_benefit,
        weather_verdict,
    };
    use battler_data::{
        Ability,
        BattleType,
        HoldEffect,
        Weather,
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

    fn sandstorm_verdict(field: &FieldSnapshot, battler: BattlerRef) -> Verdict {
        let options = FieldEffectOptions::default();
        let context = FieldEffectContext::new(static_local_data_store(), field, &options).unwrap();
        let mon = context.battler(battler).unwrap();
        weather_verdict(&context, battler, mon.ability, mon.hold_effect, Weather::Sandstorm)
    }

    fn singles(mon_json: &str, foe_json: &str) -> FieldSnapshot {
        TestFieldBuilder::new()
            .add_mon_to_side_1(mon(mon_json))
            .add_mon_to_side_2(mon(foe_json))
            .build()
    }

    const GYARADOS: &str = r#"{ "name": "Gyarados", "types": ["Water", "Flying"] }"#;

    #[test]
    fn rock_type_and_sand_abilities_benefit_from_sandstorm() {
        let field = singles(r#"{ "name": "Tyranitar", "types": ["Rock", "Dark"] }"#, GYARADOS);
        assert_eq!(sandstorm_verdict(&field, BattlerRef::new(0, 0)), Verdict::Positive);

        let field = singles(r#"{ "name": "Sandslash", "ability": "Sand Rush" }"#, GYARADOS);
        assert_eq!(sandstorm_verdict(&field, BattlerRef::new(0, 0)), Verdict::Positive);

        let field = singles(r#"{ "name": "Clefable", "ability": "Magic Guard" }"#, GYARADOS);
        assert_eq!(sandstorm_verdict(&field, BattlerRef::new(0, 0)), Verdict::Positive);

        let field = singles(r#"{ "name": "Palossand", "moves": ["Shore Up"] }"#, GYARADOS);
        assert_eq!(sandstorm_verdict(&field, BattlerRef::new(0, 0)), Verdict::Positive);
    }

    #[test]
    fn immune_mon_benefits_when_foe_is_not_immune() {
        let field = singles(r#"{ "name": "Excadrill", "types": ["Ground", "Steel"] }"#, GYARADOS);
        assert_eq!(sandstorm_verdict(&field, BattlerRef::new(0, 0)), Verdict::Positive);

        let field = singles(r#"{ "name": "Pikachu", "hold_effect": "Safety Goggles" }"#, GYARADOS);
        assert_eq!(sandstorm_verdict(&field, BattlerRef::new(0, 0)), Verdict::Positive);
    }

    #[test]
    fn immune_mon_is_neutral_when_foe_is_also_immune() {
        let excadrill = r#"{ "name": "Excadrill", "types": ["Ground", "Steel"] }"#;
        let field = singles(excadrill, r#"{ "name": "Steelix", "types": ["Steel", "Ground"] }"#);
        assert_eq!(sandstorm_verdict(&field, BattlerRef::new(0, 0)), Verdict::Neutral);

        let field = singles(
            excadrill,
            r#"{ "name": "Gyarados", "types": ["Water"], "hold_effect": "Safety Goggles" }"#,
        );
        assert_eq!(sandstorm_verdict(&field, BattlerRef::new(0, 0)), Verdict::Neutral);

        let field = singles(excadrill, r#"{ "name": "Garchomp", "ability": "Sand Veil" }"#);
        assert_eq!(sandstorm_verdict(&field, BattlerRef::new(0, 0)), Verdict::Neutral);

        let field = singles(excadrill, r#"{ "name": "Forretress", "ability": "Overcoat" }"#);
        assert_eq!(sandstorm_verdict(&field, BattlerRef::new(0, 0)), Verdict::Neutral);
    }

    #[test]
    fn mon_hurt_by_sandstorm_is_negative() {
        let field = singles(r#"{ "name": "Pikachu", "types": ["Electric"] }"#, GYARADOS);
        assert_eq!(sandstorm_verdict(&field, BattlerRef::new(0, 0)), Verdict::Negative);

        let options = FieldEffectOptions::default();
        let context = FieldEffectContext::new(static_local_data_store(), &field, &options).unwrap();
        assert!(check_weather_benefit(
            &context,
            BattlerRef::new(0, 0),
            Ability::NoAbility,
            HoldEffect::None,
            Weather::Sandstorm,
            Verdict::Negative,
        ));
    }

    #[test]
    fn one_immune_partner_against_vulnerable_foe_is_positive() {
        let field = TestFieldBuilder::new()
            .with_battle_type(BattleType::Doubles)
            .add_mon_to_side_1(mon(r#"{ "name": "Pikachu", "types": ["Electric"] }"#))
            .add_mon_to_side_1(mon(r#"{ "name": "Excadrill", "types": ["Ground", "Steel"] }"#))
            .add_mon_to_side_2(mon(GYARADOS))
            .add_mon_to_side_2(mon(r#"{ "name": "Vaporeon", "types": ["Water"] }"#))
            .build();
        assert_eq!(sandstorm_verdict(&field, BattlerRef::new(0, 0)), Verdict::Positive);
        assert_eq!(sandstorm_verdict(&field, BattlerRef::new(0, 1)), Verdict::Positive);
    }

    #[test]
    fn matching_immunity_on_both_sides_is_neutral() {
        let field = TestFieldBuilder::new()
            .with_battle_type(BattleType::Doubles)
            .add_mon_to_side_1(mon(r#"{ "name": "Excadrill", "types": ["Ground", "Steel"] }"#))
            .add_mon_to_side_1(mon(r#"{ "name": "Steelix", "types": ["Steel", "Ground"] }"#))
            .add_mon_to_side_2(mon(r#"{ "name": "Skarmory", "types": ["Steel", "Flying"] }"#))
            .add_mon_to_side_2(mon(r#"{ "name": "Hippowdon", "types": ["Ground"] }"#))
            .build();
        assert_eq!(sandstorm_verdict(&field, BattlerRef::new(0, 0)), Verdict::Neutral);
        assert_eq!(sandstorm_verdict(&field, BattlerRef::new(0, 1)), Verdict::Neutral);
    }

    #[test]
    fn partner_shore_up_benefits_from_sandstorm() {
        let field = TestFieldBuilder::new()
            .with_battle_type(BattleType::Doubles)
            .add_mon_to_side_1(mon(r#"{ "name": "Pikachu", "types": ["Electric"] }"#))
            .add_mon_to_side_1(mon(r#"{ "name": "Palossand", "moves": ["Shore Up"] }"#))
            .add_mon_to_side_2(mon(GYARADOS))
            .add_mon_to_side_2(mon(r#"{ "name": "Vaporeon", "types": ["Water"] }"#))
            .build();
        assert_eq!(sandstorm_verdict(&field, BattlerRef::new(0, 0)), Verdict::Positive);
    }
}
