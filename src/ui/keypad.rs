//! Keypad layout and keyboard bindings
//!
//! The on-screen keypad and the physical keyboard both produce [`Action`]s,
//! which [`App::apply`](super::app::App::apply) feeds to the calculator.

use crate::parser::ast::Function;
use crate::parser::AngleMode;
use crossterm::event::KeyCode;
use rustc_hash::FxHashMap;

/// Everything a key press can ask the calculator to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Insert(&'static str),
    Function(Function),
    Clear,
    AllClear,
    Backspace,
    Calculate,
    MemoryClear,
    MemoryRecall,
    MemoryAdd,
    MemorySubtract,
    TogglePower,
    SetAngle(AngleMode),
    Quit,
}

/// Visual grouping of keypad buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    Digit,
    Operator,
    Function,
    Control,
    Memory,
}

#[derive(Debug, Clone, Copy)]
pub struct Button {
    pub label: &'static str,
    pub action: Action,
    pub kind: KeyKind,
}

const fn button(label: &'static str, action: Action, kind: KeyKind) -> Button {
    Button {
        label,
        action,
        kind,
    }
}

const fn digit(label: &'static str) -> Button {
    button(label, Action::Insert(label), KeyKind::Digit)
}

const fn operator(label: &'static str) -> Button {
    button(label, Action::Insert(label), KeyKind::Operator)
}

const fn symbol(label: &'static str) -> Button {
    button(label, Action::Insert(label), KeyKind::Function)
}

const fn function(label: &'static str, function: Function) -> Button {
    button(label, Action::Function(function), KeyKind::Function)
}

pub const KEYPAD_COLUMNS: usize = 5;

pub const KEYPAD: [[Button; KEYPAD_COLUMNS]; 7] = [
    [
        button("C", Action::Clear, KeyKind::Control),
        button("AC", Action::AllClear, KeyKind::Control),
        symbol("("),
        symbol(")"),
        button("←", Action::Backspace, KeyKind::Control),
    ],
    [
        symbol("π"),
        function("sin", Function::Sin),
        function("cos", Function::Cos),
        function("tan", Function::Tan),
        operator("^"),
    ],
    [
        digit("7"),
        digit("8"),
        digit("9"),
        operator("÷"),
        function("√", Function::Sqrt),
    ],
    [
        digit("4"),
        digit("5"),
        digit("6"),
        operator("×"),
        symbol("%"),
    ],
    [
        digit("1"),
        digit("2"),
        digit("3"),
        operator("-"),
        function("log", Function::Log10),
    ],
    [
        digit("0"),
        digit("."),
        symbol("e"),
        operator("+"),
        button("=", Action::Calculate, KeyKind::Operator),
    ],
    [
        button("MC", Action::MemoryClear, KeyKind::Memory),
        button("MR", Action::MemoryRecall, KeyKind::Memory),
        button("M+", Action::MemoryAdd, KeyKind::Memory),
        button("M-", Action::MemorySubtract, KeyKind::Memory),
        button("PWR", Action::TogglePower, KeyKind::Control),
    ],
];

const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// Keyboard shortcuts
pub fn key_bindings() -> FxHashMap<KeyCode, Action> {
    let mut bindings = FxHashMap::default();

    for (d, text) in ('0'..='9').zip(DIGITS) {
        bindings.insert(KeyCode::Char(d), Action::Insert(text));
    }

    let chars: [(char, Action); 19] = [
        ('+', Action::Insert("+")),
        ('-', Action::Insert("-")),
        ('*', Action::Insert("×")),
        ('x', Action::Insert("×")),
        ('/', Action::Insert("÷")),
        ('^', Action::Insert("^")),
        ('%', Action::Insert("%")),
        ('.', Action::Insert(".")),
        ('(', Action::Insert("(")),
        (')', Action::Insert(")")),
        ('p', Action::Insert("π")),
        ('e', Action::Insert("e")),
        ('s', Action::Function(Function::Sin)),
        ('c', Action::Function(Function::Cos)),
        ('t', Action::Function(Function::Tan)),
        ('r', Action::Function(Function::Sqrt)),
        ('l', Action::Function(Function::Log10)),
        ('=', Action::Calculate),
        ('q', Action::Quit),
    ];
    for (c, action) in chars {
        bindings.insert(KeyCode::Char(c), action);
    }

    bindings.insert(KeyCode::Enter, Action::Calculate);
    bindings.insert(KeyCode::Backspace, Action::Backspace);
    bindings.insert(KeyCode::Esc, Action::AllClear);
    bindings.insert(KeyCode::Delete, Action::Clear);
    bindings.insert(KeyCode::F(1), Action::TogglePower);
    bindings.insert(KeyCode::F(2), Action::SetAngle(AngleMode::Degrees));
    bindings.insert(KeyCode::F(3), Action::SetAngle(AngleMode::Radians));
    bindings.insert(KeyCode::F(5), Action::MemoryClear);
    bindings.insert(KeyCode::F(6), Action::MemoryRecall);
    bindings.insert(KeyCode::F(7), Action::MemoryAdd);
    bindings.insert(KeyCode::F(8), Action::MemorySubtract);

    bindings
}
