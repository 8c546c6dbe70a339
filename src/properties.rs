use std::cmp::Ordering;

use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{ArithmeticError, BigUint};

fn to_oracle(val: &BigUint) -> num_bigint::BigUint {
    num_bigint::BigUint::new(val.blocks().to_vec())
}

fn from_oracle(val: &num_bigint::BigUint) -> BigUint {
    BigUint::from_blocks(val.to_u32_digits())
}

fn is_normalized(val: &BigUint) -> bool {
    val.length() <= val.capacity() && val.blocks().last().map_or(true, |&top| top != 0)
}

fn big_uint() -> impl Strategy<Value = BigUint> {
    prop::collection::vec(any::<u32>(), 0..6).prop_map(BigUint::from_blocks)
}

fn random_big_uint(rng: &mut StdRng, max_blocks: usize) -> BigUint {
    let len = rng.gen_range(0..=max_blocks);
    BigUint::from_blocks((0..len).map(|_| rng.gen::<u32>()).collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn add_then_sub_round_trips(a in big_uint(), b in big_uint()) {
        let sum = &a + &b;
        prop_assert!(is_normalized(&sum));
        let diff = sum - &b;
        prop_assert!(is_normalized(&diff));
        prop_assert_eq!(diff, a);
    }

    #[test]
    fn add_and_mul_commute(a in big_uint(), b in big_uint()) {
        prop_assert_eq!(&a + &b, &b + &a);
        let ab = &a * &b;
        prop_assert!(is_normalized(&ab));
        prop_assert_eq!(ab, &b * &a);
    }

    #[test]
    fn division_identity(a in big_uint(), b in big_uint()) {
        prop_assume!(!b.is_zero());
        let (q, r) = a.div_rem(&b).unwrap();
        prop_assert!(is_normalized(&q));
        prop_assert!(is_normalized(&r));
        prop_assert!(r < b);
        prop_assert_eq!(&q, &(&a / &b));
        prop_assert_eq!(&r, &(&a % &b));
        prop_assert_eq!(q * &b + r, a);
    }

    #[test]
    fn shifts_compose(a in big_uint(), s1 in 0usize..100, s2 in 0usize..100) {
        let stepwise = (&a << s1) << s2;
        prop_assert!(is_normalized(&stepwise));
        prop_assert_eq!(stepwise, &a << (s1 + s2));
    }

    #[test]
    fn shl_then_shr_round_trips(a in big_uint(), s in 0usize..200) {
        let shifted = &a << s;
        let back = shifted >> s;
        prop_assert!(is_normalized(&back));
        prop_assert_eq!(back, a);
    }

    #[test]
    fn ordering_is_total(a in big_uint(), b in big_uint()) {
        let holds = [a < b, a == b, a > b];
        prop_assert_eq!(holds.iter().filter(|&&h| h).count(), 1);
        prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
        prop_assert_eq!(a.cmp(&b), to_oracle(&a).cmp(&to_oracle(&b)));
        prop_assert_eq!(a <= b, a.cmp(&b) != Ordering::Greater);
        prop_assert_eq!(a >= b, a.cmp(&b) != Ordering::Less);
    }

    #[test]
    fn ordering_is_transitive(a in big_uint(), b in big_uint(), c in big_uint()) {
        if a <= b && b <= c {
            prop_assert!(a <= c);
        }
        if a == b && b == c {
            prop_assert_eq!(&a, &c);
        }
    }

    #[test]
    fn digit_string_round_trips(a in big_uint()) {
        let digits = a.to_digit_string();
        prop_assert!(digits.len() as u64 == a.bit_len().max(1));
        prop_assert_eq!(digits.parse::<BigUint>().unwrap(), a);
    }

    #[test]
    fn sub_larger_is_rejected(a in big_uint(), b in big_uint()) {
        prop_assume!(a < b);
        prop_assert_eq!(a.try_sub(&b), Err(ArithmeticError::NegativeResult));
    }
}

#[test]
fn test_against_num_bigint() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..200 {
        let a = random_big_uint(&mut rng, 8);
        let b = random_big_uint(&mut rng, 5);
        let (x, y) = (to_oracle(&a), to_oracle(&b));

        assert_eq!(&a + &b, from_oracle(&(&x + &y)));
        assert_eq!(&a * &b, from_oracle(&(&x * &y)));
        if a >= b {
            assert_eq!(&a - &b, from_oracle(&(&x - &y)));
        }
        if !b.is_zero() {
            assert_eq!(&a / &b, from_oracle(&(&x / &y)));
            assert_eq!(&a % &b, from_oracle(&(&x % &y)));
        }

        let shift = rng.gen_range(0..130usize);
        assert_eq!(&a << shift, from_oracle(&(&x << shift)));
        assert_eq!(&a >> shift, from_oracle(&(&x >> shift)));
    }
}

#[test]
fn test_digit_string_against_num_bigint() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let a = random_big_uint(&mut rng, 4);
        let expected: String = if a.is_zero() {
            String::from("0")
        } else {
            to_oracle(&a).to_str_radix(2).chars().rev().collect()
        };
        assert_eq!(a.to_digit_string(), expected);
    }
}

#[test]
fn test_scenarios() {
    let sum = BigUint::from_digits("11").unwrap() + BigUint::from_digits("1").unwrap();
    assert_eq!(sum, BigUint::from_digits("001").unwrap());
    assert_eq!(sum, BigUint::from(4u32));

    let sum = BigUint::from_digits(&"1".repeat(32)).unwrap() + BigUint::from_digits("1").unwrap();
    assert_eq!(sum.length(), 2);
    assert_eq!(sum, BigUint::from(1u64 << 32));

    assert_eq!(
        BigUint::from(3u32).try_sub(&BigUint::from(5u32)),
        Err(ArithmeticError::NegativeResult)
    );

    assert_eq!(
        BigUint::from(1u32).try_div(&BigUint::from(0u32)),
        Err(ArithmeticError::DivisionByZero)
    );

    let one = BigUint::from_digits("1").unwrap();
    assert_eq!((&one << 34) >> 34, one);

    let mut fresh = BigUint::default();
    assert!(matches!(
        fresh.assign_digits("0a"),
        Err(ArithmeticError::InvalidDigitString { .. })
    ));
    assert_eq!(fresh, BigUint::zero());
}

#[test]
fn test_large_operands() {
    let mut rng = StdRng::seed_from_u64(42);
    let a = random_big_uint(&mut rng, 24);
    let b = random_big_uint(&mut rng, 9);
    let product = &a * &b;
    assert_eq!(product, from_oracle(&(to_oracle(&a) * to_oracle(&b))));
    if !b.is_zero() {
        let (q, r) = product.div_rem(&b).unwrap();
        assert_eq!(q, a);
        assert!(r.is_zero());
    }
}
