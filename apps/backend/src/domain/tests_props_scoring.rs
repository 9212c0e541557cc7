use proptest::prelude::*;

use crate::domain::scoring::score_guess;
use crate::domain::test_gens;

proptest! {
    #[test]
    fn guessing_the_secret_scores_all_exact(secret in test_gens::any_code()) {
        let score = score_guess(&secret, &secret).unwrap();
        prop_assert_eq!(usize::from(score.exact_matches), secret.len());
        prop_assert_eq!(score.color_matches, 0);
    }

    #[test]
    fn matches_never_exceed_code_length((secret, guess) in test_gens::code_pair()) {
        let score = score_guess(&secret, &guess).unwrap();
        let total = usize::from(score.exact_matches) + usize::from(score.color_matches);
        prop_assert!(total <= secret.len());
    }

    #[test]
    fn scoring_is_deterministic((secret, guess) in test_gens::code_pair()) {
        let first = score_guess(&secret, &guess).unwrap();
        let second = score_guess(&secret, &guess).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn raw_match_count_is_symmetric((secret, guess) in test_gens::code_pair()) {
        // exact + color is the multiset intersection size, which does not
        // depend on which code plays the secret role.
        let forward = score_guess(&secret, &guess).unwrap();
        let backward = score_guess(&guess, &secret).unwrap();
        prop_assert_eq!(
            forward.exact_matches + forward.color_matches,
            backward.exact_matches + backward.color_matches
        );
        // Exact matches are positional and symmetric on their own.
        prop_assert_eq!(forward.exact_matches, backward.exact_matches);
    }

    #[test]
    fn reversing_the_guess_preserves_the_intersection((secret, guess) in test_gens::code_pair()) {
        use crate::domain::Code;

        let reversed = Code::new(guess.pegs().iter().rev().copied().collect()).unwrap();
        let original = score_guess(&secret, &guess).unwrap();
        let mirrored = score_guess(&secret, &reversed).unwrap();
        prop_assert_eq!(
            original.exact_matches + original.color_matches,
            mirrored.exact_matches + mirrored.color_matches
        );
    }
}
