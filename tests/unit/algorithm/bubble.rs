//! Tests for bubble sort step emission

#[cfg(test)]
mod tests {
    use sortviz::algorithm::StepCounter;
    use sortviz::algorithm::bubble::bubble_sort;
    use sortviz::Result;
    use sortviz::model::ArrayModel;

    // Tests a small reversed pair of swaps plus the final step
    // Verified by removing the final notification
    #[test]
    fn test_bubble_sort_three_values() {
        let mut array = ArrayModel::from_values(vec![3, 1, 2]).unwrap();
        let mut counter = StepCounter::new();

        bubble_sort(&mut array, &mut counter).unwrap();

        assert_eq!(array.values(), &[1, 2, 3]);
        assert_eq!(array.swap_count(), 2);
        assert_eq!(counter.steps(), 3);
    }

    // Tests sorted input only produces the closing step
    // Verified by emitting a step per comparison
    #[test]
    fn test_bubble_sort_already_sorted() {
        let mut array = ArrayModel::sorted(6).unwrap();
        let mut counter = StepCounter::new();

        bubble_sort(&mut array, &mut counter).unwrap();

        assert_eq!(array.swap_count(), 0);
        assert_eq!(counter.steps(), 1);
    }

    // Tests single element and empty arrays emit nothing
    // Verified by dropping the length guard
    #[test]
    fn test_bubble_sort_trivial_lengths() {
        for len in [0, 1] {
            let mut array = ArrayModel::sorted(len).unwrap();
            let mut counter = StepCounter::new();
            bubble_sort(&mut array, &mut counter).unwrap();
            assert_eq!(counter.steps(), 0);
        }
    }

    // Tests fully reversed input needs one swap per inversion
    // Verified by shortening the inner pass
    #[test]
    fn test_bubble_sort_reversed() {
        let mut array = ArrayModel::from_values(vec![5, 4, 3, 2, 1]).unwrap();
        let mut counter = StepCounter::new();

        bubble_sort(&mut array, &mut counter).unwrap();

        assert!(array.is_sorted());
        assert_eq!(array.swap_count(), 10);
        assert_eq!(counter.steps(), 11);
    }

    // Tests every step observes a permutation
    // Verified by notifying between reads and the swap
    #[test]
    fn test_bubble_sort_steps_are_permutations() {
        let mut array = ArrayModel::from_values(vec![4, 2, 5, 1, 3]).unwrap();
        let mut observer = |state: &ArrayModel| -> Result<()> {
            assert!(state.is_permutation());
            Ok(())
        };

        bubble_sort(&mut array, &mut observer).unwrap();
        assert!(array.is_sorted());
    }
}
