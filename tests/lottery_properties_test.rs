use seed_lottery::{compute_lottery, parse_entrants, LotteryError, LotteryResult, Seed};
use std::collections::HashMap;

const FIVE: &str = "alice\nbob\ncarol\ndave\nerin";

fn names_of(result: &LotteryResult) -> Vec<&str> {
    result
        .shuffled_entrants()
        .iter()
        .map(|e| e.name.as_str())
        .collect()
}

fn counts<'a>(names: impl IntoIterator<Item = &'a str>) -> HashMap<&'a str, usize> {
    let mut map = HashMap::new();
    for name in names {
        *map.entry(name).or_insert(0) += 1;
    }
    map
}

/// A spread of seeds covering both ends of the range.
fn seeds() -> Vec<String> {
    let mut seeds: Vec<String> = (0u32..64)
        .map(|i| format!("{:08X}", i.wrapping_mul(0x9E37_79B9)))
        .collect();
    seeds.extend(["00000000", "FFFFFFFF", "deadbeef", "1A2B3C4D"].map(String::from));
    seeds
}

#[test]
fn test_same_inputs_give_identical_results() {
    for seed in seeds() {
        let a = compute_lottery(FIVE, &seed).unwrap();
        let b = compute_lottery(FIVE, &seed).unwrap();
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}

#[test]
fn test_shuffle_is_a_permutation_of_parsed_entrants() {
    let text = "zoe\n  amy \n\nzoe\nbo\namy\ncy\n";
    let parsed = parse_entrants(text).unwrap();
    let expected = counts(parsed.names().iter().map(String::as_str));

    for seed in seeds() {
        let result = compute_lottery(text, &seed).unwrap();
        assert_eq!(result.total_entrants(), parsed.len());
        assert_eq!(result.shuffled_entrants().len(), parsed.len());
        assert_eq!(counts(names_of(&result)), expected);
    }
}

#[test]
fn test_winning_position_in_range_and_matches_name() {
    for n in 1..=12usize {
        let text: String = (0..n).map(|i| format!("entrant-{}\n", i)).collect();
        for seed in seeds() {
            let result = compute_lottery(&text, &seed).unwrap();
            let p = result.winning_position();
            assert!((1..=n).contains(&p));
            assert_eq!(p, (result.decimal_value() as usize % n) + 1);
            assert_eq!(result.shuffled_entrants()[p - 1].name, result.winner());
        }
    }
}

#[test]
fn test_different_seeds_produce_different_orders() {
    let orders: Vec<Vec<String>> = seeds()
        .iter()
        .map(|seed| {
            let result = compute_lottery(FIVE, seed).unwrap();
            names_of(&result).into_iter().map(String::from).collect()
        })
        .collect();
    assert!(orders.iter().any(|order| order != &orders[0]));

    let zero = compute_lottery(FIVE, "00000000").unwrap();
    let one = compute_lottery(FIVE, "00000001").unwrap();
    assert_ne!(names_of(&zero), names_of(&one));
}

#[test]
fn test_single_entrant_always_wins() {
    for seed in seeds() {
        let result = compute_lottery("  only-one  ", &seed).unwrap();
        assert_eq!(result.winning_position(), 1);
        assert_eq!(result.winner(), "only-one");
    }
}

#[test]
fn test_rejections() {
    assert!(matches!(
        compute_lottery("", "1A2B3C4D"),
        Err(LotteryError::EmptyEntrants)
    ));
    assert!(matches!(
        compute_lottery("   \n\n\t \n", "1A2B3C4D"),
        Err(LotteryError::EmptyEntrants)
    ));
    for bad in ["1A2B3C4", "1A2B3C4G"] {
        match compute_lottery(FIVE, bad) {
            Err(err) => {
                assert!(err.is_invalid_input());
                assert!(matches!(err, LotteryError::MalformedSeed { ref seed } if seed == bad));
            }
            Ok(result) => panic!("seed {} should be rejected, got {:?}", bad, result),
        }
    }
}

#[test]
fn test_seed_zero_regression() {
    let result = compute_lottery("alice\nbob\ncarol", "00000000").unwrap();
    assert_eq!(names_of(&result), ["bob", "carol", "alice"]);
    assert_eq!(result.decimal_value(), 0);
    assert_eq!(result.winning_position(), 1);
    assert_eq!(result.winner(), "bob");
}

#[test]
fn test_seed_five_with_five_entrants() {
    let result = compute_lottery("e1\ne2\ne3\ne4\ne5", "00000005").unwrap();
    assert_eq!(result.decimal_value(), 5);
    assert_eq!(result.total_entrants(), 5);
    assert_eq!(result.winning_position(), 1);
}

#[test]
fn test_reference_draws() {
    let result = compute_lottery(FIVE, "1A2B3C4D").unwrap();
    assert_eq!(names_of(&result), ["erin", "carol", "bob", "alice", "dave"]);
    assert_eq!(result.decimal_value(), 439_041_101);
    assert_eq!(result.winning_position(), 2);
    assert_eq!(result.winner(), "carol");

    let result = compute_lottery(FIVE, "deadbeef").unwrap();
    assert_eq!(result.seed(), "deadbeef");
    assert_eq!(result.decimal_value(), 0xDEAD_BEEF);
    assert_eq!(result.winning_position(), 5);
    assert_eq!(result.winner(), "carol");
}

#[test]
fn test_seed_case_does_not_change_outcome() {
    let lower = compute_lottery(FIVE, "deadbeef").unwrap();
    let upper = compute_lottery(FIVE, "DEADBEEF").unwrap();
    assert_eq!(names_of(&lower), names_of(&upper));
    assert_eq!(lower.winner(), upper.winner());
    assert_eq!(upper.seed(), "DEADBEEF");
}

#[test]
fn test_random_seed_is_accepted_by_compute() {
    let seed = Seed::random();
    let result = compute_lottery(FIVE, seed.as_str()).unwrap();
    assert_eq!(result.decimal_value(), seed.value());
}
