use measura_core::{
    AnyUnit, Category, LengthUnit, MeasureError, MeasurementService, Operation, Outcome, Quantity,
    WeightUnit, EPSILON,
};
use pretty_assertions::assert_eq;

fn eval(input: &str) -> Result<Outcome, MeasureError> {
    MeasurementService::new().evaluate(input)
}

fn eval_display(input: &str) -> String {
    eval(input).map(|o| o.to_string()).unwrap_or_else(|e| format!("Error: {e}"))
}

#[test]
fn test_add_wrappers() {
    let service = MeasurementService::new();
    let a = Quantity::new(1.0, LengthUnit::Feet).unwrap();
    let b = Quantity::new(12.0, LengthUnit::Inch).unwrap();

    let sum = service.add_quantities(Some(&a), Some(&b)).unwrap();
    assert_eq!(sum.unit(), LengthUnit::Feet);
    assert!((sum.value() - 2.0).abs() < EPSILON);

    let sum = service
        .add_quantities_with_target(Some(&a), Some(&b), LengthUnit::Inch)
        .unwrap();
    assert_eq!(sum.unit(), LengthUnit::Inch);
    assert!((sum.value() - 24.0).abs() < EPSILON);
}

#[test]
fn test_subtract_and_divide_wrappers() {
    let service = MeasurementService::new();
    let a = Quantity::new(1.0, WeightUnit::Kilogram).unwrap();
    let b = Quantity::new(250.0, WeightUnit::Gram).unwrap();

    let diff = service
        .subtract_quantities_with_target(Some(&a), Some(&b), WeightUnit::Gram)
        .unwrap();
    assert!((diff.value() - 750.0).abs() < EPSILON);

    let diff = service.subtract_quantities(Some(&a), Some(&b)).unwrap();
    assert!((diff.value() - 0.75).abs() < EPSILON);

    let ratio = service.divide_quantities(Some(&a), Some(&b)).unwrap();
    assert!((ratio - 4.0).abs() < EPSILON);
}

#[test]
fn test_missing_operand() {
    let service = MeasurementService::new();
    let a = Quantity::new(1.0, WeightUnit::Kilogram).unwrap();
    assert_eq!(
        service.subtract_quantities(None, Some(&a)),
        Err(MeasureError::InvalidOperand)
    );
    assert_eq!(
        service.add_quantities_with_target(Some(&a), None, WeightUnit::Gram),
        Err(MeasureError::InvalidOperand)
    );
}

#[test]
fn test_equality_wrapper() {
    let service = MeasurementService::new();
    let a = Quantity::new(1.0, LengthUnit::Yard).unwrap();
    let b = Quantity::new(91.44, LengthUnit::Centimeter).unwrap();
    assert!(service.are_quantities_equal(Some(&a), Some(&b)));
    assert!(!service.are_quantities_equal(None, Some(&b)));
}

#[test]
fn test_evaluate_scenarios() {
    assert_eq!(eval_display("1 ft in in"), "12 in");
    assert_eq!(eval_display("2.54 cm to in"), "1 in");
    assert_eq!(eval_display("1 ft + 12 in"), "2 ft");
    assert_eq!(eval_display("1 ft + 12 in in yd"), "0.666667 yd");
    assert_eq!(eval_display("100 c in f"), "212 °F");
    assert_eq!(eval_display("-40 c == -40 f"), "equal");
    assert_eq!(eval_display("1 ft / 6 in"), "2");
    assert_eq!(eval_display("12 in / 6 in"), "2");
    assert_eq!(eval_display("1 gal - 1 l in ml"), "2785.41 mL");
    assert_eq!(eval_display("1,000 g in kg"), "1 kg");
}

#[test]
fn test_evaluate_errors() {
    assert_eq!(
        eval("10 c + 5 c"),
        Err(MeasureError::UnsupportedOperation {
            operation: Operation::Add,
            category: Category::Temperature,
        })
    );
    assert_eq!(eval("1 ft / 0 in"), Err(MeasureError::DivisionByZero));
    assert_eq!(
        eval("1 ft in kg"),
        Err(MeasureError::IncompatibleCategories {
            left: Category::Length,
            right: Category::Weight,
        })
    );
    assert!(matches!(eval("one foot"), Err(MeasureError::Parse(_))));
    assert_eq!(
        eval_display("2 kg + 3 lightyears"),
        "Error: unknown unit: lightyears"
    );
}

#[test]
fn test_evaluate_empty_and_comment() {
    assert_eq!(eval("").unwrap(), Outcome::Empty);
    assert_eq!(eval("# weights").unwrap(), Outcome::Empty);
}

#[test]
fn test_catalog_covers_every_unit() {
    let catalog = MeasurementService::new().catalog();
    let total: usize = catalog.iter().map(|(_, units)| units.len()).sum();
    assert_eq!(total, AnyUnit::all().count());
    for (category, units) in catalog {
        assert!(units.iter().all(|u| u.category() == category));
    }
}
