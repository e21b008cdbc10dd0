use hylambda::boolean::cond_deferred;
use hylambda::fix::*;
use hylambda::numeral::{add, decode, from_usize, is_zero, pred, zero};
use hylambda::runner::run_with_stack;
use hylambda::utils::conf::EvalConfig;
use hylambda::value::Value;

#[test]
fn factorial_small_values() {
    let fact = factorial();
    assert_eq!(decode(&fact.apply(zero())), 1);
    assert_eq!(decode(&fact.apply(from_usize(1))), 1);
    assert_eq!(decode(&fact.apply(from_usize(3))), 6);
    assert_eq!(decode(&fact.apply(from_usize(4))), 24);
    assert_eq!(decode(&fact.apply(from_usize(5))), 120);
}

#[test]
fn fixed_point_unfolds_once_per_call() {
    // triangle(n) = n + triangle(n - 1), triangle(0) = 0
    let triangle = fix(&Value::new(|this| {
        Value::new(move |n| {
            let (this, m) = (this.clone(), n.clone());
            cond_deferred(&is_zero(&n), zero, move || {
                add(&m, &this.apply(pred(&m)))
            })
        })
    }));

    for n in 0..8usize {
        assert_eq!(decode(&triangle.apply(from_usize(n))), n * (n + 1) / 2);
    }
}

#[test]
fn y_and_fix_agree() {
    let via_y = y().apply(Value::new(|_| Value::new(|n| n)));
    assert_eq!(decode(&via_y.apply(from_usize(4))), 4);
}

#[test]
fn division_and_remainder() {
    for m in 0..14usize {
        for n in 0..5usize {
            let (cm, cn) = (from_usize(m), from_usize(n));
            let (q, r) = if n == 0 { (0, 0) } else { (m / n, m % n) };
            assert_eq!(decode(&div(&cm, &cn)), q, "{m} / {n}");
            assert_eq!(decode(&rem(&cm, &cn)), r, "{m} % {n}");
        }
    }
}

#[test]
fn runner_returns_host_results() {
    let config = EvalConfig::default();
    let result = run_with_stack(&config, || decode(&factorial().apply(from_usize(6))));
    assert_eq!(result.unwrap(), 720);
}

#[test]
fn runner_reports_panics() {
    let config = EvalConfig {
        stack_size: 1 << 20,
        ..EvalConfig::default()
    };
    let err = run_with_stack(&config, || -> usize { panic!("boom") }).unwrap_err();
    match err {
        hylambda::utils::error::LambdaError::EvaluationPanicked(message) => {
            assert_eq!(message, "boom")
        }
        other => panic!("unexpected error {other:?}"),
    }
}
