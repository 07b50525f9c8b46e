// Integration tests for the calculator state machine

use calcade::calculator::{CalcOutcome, Calculator};
use calcade::parser::ast::Function;
use calcade::parser::AngleMode;

fn powered() -> Calculator {
    let mut calc = Calculator::new();
    calc.toggle_power();
    calc
}

fn run(calc: &mut Calculator, input: &str) -> CalcOutcome {
    calc.insert_text(input);
    calc.calculate()
}

fn value_of(input: &str) -> String {
    let mut calc = powered();
    let outcome = run(&mut calc, input);
    assert!(outcome.success, "{} failed: {}", input, outcome.message);
    outcome.value
}

fn error_of(input: &str) -> String {
    let mut calc = powered();
    let outcome = run(&mut calc, input);
    assert!(!outcome.success, "{} unexpectedly gave {}", input, outcome.value);
    assert_eq!(outcome.value, "Error");
    outcome.message
}

#[test]
fn test_precedence() {
    assert_eq!(value_of("2+3×4"), "14");
    assert_eq!(value_of("(2+3)×4"), "20");
    assert_eq!(value_of("10-4-3"), "3");
    assert_eq!(value_of("8÷4÷2"), "1");
    assert_eq!(value_of("((2+1)×3)+4"), "13");
    assert_eq!(value_of("-5+3"), "-2");
    assert_eq!(value_of("sqrt(16)"), "4");
}

#[test]
fn test_decimals() {
    assert_eq!(value_of("2.5+1.5"), "4");
    assert_eq!(value_of("0.00001+0.00002"), "3e-05");
    assert_eq!(value_of("1÷3"), "0.3333333333");
}

#[test]
fn test_percent() {
    assert_eq!(value_of("50%"), "0.5");
    assert_eq!(value_of("200×15%"), "30");
}

#[test]
fn test_powers() {
    assert_eq!(value_of("2^10"), "1024");
    assert_eq!(value_of("2^3^2"), "512");
    assert_eq!(value_of("-2^2"), "-4");
    assert_eq!(value_of("2^-1"), "0.5");
    assert_eq!(value_of("3**2"), "9");
}

#[test]
fn test_trig_in_degrees() {
    assert_eq!(value_of("sin(30)"), "0.5");
    assert_eq!(value_of("cos(60)"), "0.5");
    assert_eq!(value_of("tan(45)"), "1");
    assert_eq!(value_of("sin(30)+1"), "1.5");
}

#[test]
fn test_trig_with_space_before_paren() {
    assert_eq!(value_of("sin (30)"), "0.5");
    assert_eq!(value_of("cos (60)+1"), "1.5");
}

#[test]
fn test_trig_in_radians() {
    let mut calc = powered();
    calc.set_angle_mode(AngleMode::Radians);
    assert_eq!(run(&mut calc, "sin(π÷2)").value, "1");
}

#[test]
fn test_functions_via_keypad() {
    let mut calc = powered();
    calc.insert_function(Function::Sqrt);
    calc.insert_text("16");
    assert_eq!(calc.calculate().value, "4");

    let mut calc = powered();
    calc.insert_function(Function::Log10);
    calc.insert_text("100)");
    assert_eq!(calc.calculate().value, "2");
}

#[test]
fn test_constants() {
    assert_eq!(value_of("π"), "3.141592654");
    assert_eq!(value_of("e"), "2.718281828");
    assert_eq!(value_of("2×pi"), "6.283185307");
}

#[test]
fn test_auto_close_parentheses() {
    assert_eq!(value_of("((2+3)×4"), "20");
    assert_eq!(value_of("sqrt(9"), "3");
}

#[test]
fn test_large_numbers() {
    assert_eq!(value_of("999999×999999"), "999998000001");
    assert_eq!(value_of("10^15"), "1000000000000000");
}

#[test]
fn test_division_by_zero() {
    assert!(error_of("5÷0").to_lowercase().contains("division by zero"));
    assert!(error_of("0^-1").to_lowercase().contains("division by zero"));
}

#[test]
fn test_domain_errors() {
    assert!(error_of("sqrt(-1)").to_lowercase().contains("domain"));
    assert!(error_of("log(0)").to_lowercase().contains("domain"));
}

#[test]
fn test_syntax_errors() {
    assert!(error_of("2+").to_lowercase().contains("syntax"));
    assert!(error_of("2)").to_lowercase().contains("syntax"));
    assert!(error_of("foo(2)").to_lowercase().contains("syntax"));
}

#[test]
fn test_degree_helper_is_not_a_function() {
    assert!(error_of("rad(180)").contains("Unknown function 'rad'"));
}

#[test]
fn test_deep_nesting_reports_an_error() {
    let message = error_of(&format!("{}1", "-".repeat(5_000)));
    assert!(message.contains("nested too deeply"));
    let message = error_of(&format!("{}2", "(".repeat(10_000)));
    assert!(message.contains("nested too deeply"));
    assert_eq!(value_of(&format!("{}2{}", "(".repeat(50), ")".repeat(50))), "2");
}

#[test]
fn test_overflow() {
    assert!(error_of("10^400").contains("out of range"));
}

#[test]
fn test_empty_expression() {
    let mut calc = powered();
    let outcome = calc.calculate();
    assert!(!outcome.success);
    assert_eq!(outcome.value, "");
    assert_eq!(outcome.message, "No expression to calculate");
}

#[test]
fn test_calculate_while_off() {
    let mut calc = Calculator::new();
    calc.insert_text("2+2");
    let (success, value, message) = calc.calculate().into_tuple();
    assert!(!success);
    assert_eq!(value, "");
    assert_eq!(message, "No expression to calculate");
}

#[test]
fn test_backspace_on_empty() {
    let mut calc = powered();
    assert_eq!(calc.backspace(), "");
}

#[test]
fn test_continue_from_result() {
    let mut calc = powered();
    run(&mut calc, "0.00001+0.00002");
    calc.insert_text("×2");
    assert_eq!(calc.calculate().value, "6e-05");
}

#[test]
fn test_reset_all() {
    let mut calc = powered();
    run(&mut calc, "2+2");
    calc.insert_text("+1");
    let (expression, shown) = calc.reset_all();
    assert_eq!(expression, "");
    assert_eq!(shown, "0");
    assert_eq!(calc.result(), "");
    assert_eq!(calc.last_answer(), "0");
    assert!(calc.history().is_empty());
}

#[test]
fn test_mode_changes_need_power() {
    let mut calc = Calculator::new();
    assert_eq!(calc.set_angle_mode(AngleMode::Radians), AngleMode::Degrees);
    calc.toggle_power();
    assert_eq!(calc.set_angle_mode(AngleMode::Radians), AngleMode::Radians);
}

#[test]
fn test_history_is_bounded() {
    let mut calc = Calculator::with_history_capacity(3);
    calc.toggle_power();
    for n in 1..=5 {
        calc.insert_text(&n.to_string());
        calc.calculate();
    }
    let results: Vec<&str> = calc.history().entries().map(|e| e.result.as_str()).collect();
    assert_eq!(results, ["3", "4", "5"]);
}
