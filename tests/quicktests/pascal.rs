use dslab::pascal;

quickcheck::quickcheck! {
    fn row_sums_to_power_of_two(n: u8) -> bool {
        let n = u64::from(n % 64);
        let row = pascal::row(n).unwrap();

        row.len() as u64 == n + 1 && row.iter().sum::<u64>() == 1 << n
    }

    fn symmetric(n: u8, k: u8) -> bool {
        let (n, k) = (u64::from(n % 60), u64::from(k % 60));
        if k > n {
            return pascal::binomial(n, k) == Ok(0);
        }

        pascal::binomial(n, k) == pascal::binomial(n, n - k)
    }

    fn pascals_rule(n: u8, k: u8) -> bool {
        let (n, k) = (u64::from(n % 60) + 1, u64::from(k % 60) + 1);

        pascal::binomial(n, k)
            == Ok(pascal::binomial(n - 1, k - 1).unwrap() + pascal::binomial(n - 1, k).unwrap())
    }
}
