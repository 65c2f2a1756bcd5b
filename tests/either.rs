use std::cell::Cell;

use either_fold::{Either, Fold, Left, Right};

#[test]
fn left_adds_and_right_subtracts() {
    let left: Either<i32, i32> = Either::left(42);
    let right: Either<i32, i32> = Either::right(42);

    assert_eq!(left.fold(|x| x + 1, |x| x - 1), 43);
    assert_eq!(right.fold(|x| x + 1, |x| x - 1), 41);
}

#[test]
fn left_is_never_right() {
    let err: Either<&str, ()> = Either::left("err");

    assert!(!err.is_right());
    assert!(err.is_left());
}

#[test]
fn right_reads_back_its_payload() {
    let ok: Either<(), &str> = Either::right("ok");

    assert_eq!(ok.read(), Either::right(&"ok"));
    assert_eq!(ok.fold(|()| "", |s| s), "ok");
}

#[test]
fn exactly_one_tag_holds() {
    let values: Vec<Either<u8, char>> = vec![
        Either::left(0),
        Either::right('x'),
        Left(255).into(),
        Right('y').into(),
    ];

    for value in &values {
        assert!(value.is_left() != value.is_right());
    }
}

#[test]
fn handlers_run_once_and_only_on_their_branch() {
    let left_calls = Cell::new(0);
    let right_calls = Cell::new(0);

    let on_left = |x: i32| {
        left_calls.set(left_calls.get() + 1);
        x
    };
    let on_right = |x: i32| {
        right_calls.set(right_calls.get() + 1);
        x
    };

    Either::<i32, i32>::left(1).fold(on_left, on_right);
    assert_eq!((left_calls.get(), right_calls.get()), (1, 0));

    Either::<i32, i32>::right(1).fold(on_left, on_right);
    assert_eq!((left_calls.get(), right_calls.get()), (1, 1));
}

#[test]
fn generic_fold_over_variants() {
    fn render(branch: impl Fold<u16, &'static str>) -> String {
        branch.fold(|code| format!("error {code}"), str::to_owned)
    }

    assert_eq!(render(Left(404)), "error 404");
    assert_eq!(render(Right("fine")), "fine");
    assert_eq!(render(Either::left(500)), "error 500");
}

#[test]
fn failure_and_success_map_onto_result() {
    let parsed: Either<String, i32> = "12"
        .parse::<i32>()
        .map_err(|err| err.to_string())
        .into();
    let failed: Either<String, i32> = "twelve"
        .parse::<i32>()
        .map_err(|err| err.to_string())
        .into();

    assert!(parsed.is_right());
    assert!(failed.is_left());
    assert_eq!(parsed.into_result(), Ok(12));
    assert_eq!(
        failed.into_result(),
        Err(String::from("invalid digit found in string"))
    );
}

#[test]
fn display_shows_the_tag() {
    let left: Either<i32, &str> = Either::left(-1);
    let right: Either<i32, &str> = Either::right("done");

    similar_asserts::assert_eq!(left.to_string().as_str(), "Left(-1)");
    similar_asserts::assert_eq!(right.to_string().as_str(), "Right(done)");
}
