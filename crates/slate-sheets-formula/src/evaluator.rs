//! Formula evaluator
//!
//! Single-pass, two-stack operator-precedence evaluation of tokenized
//! formulas. Operands (numeric literals and dereferenced cell values) and
//! pending operators live on separate call-scoped stacks; operators are
//! reduced eagerly whenever the stacked operator binds at least as tightly
//! as the incoming one, which gives left-associative evaluation with `* /`
//! above `+ -`.

use slate_sheets_core::{messages, Cell, SheetMemory, Token};

/// Two-stack evaluator for tokenized arithmetic formulas
///
/// Holds a read-only handle to sheet memory plus the observable outcome of
/// the most recent [`evaluate`](Self::evaluate) call. Formula-level errors
/// are recorded as display strings from [`messages`], never returned as
/// `Err`; a healthy evaluation leaves [`error`](Self::error) empty.
pub struct FormulaEvaluator<'a> {
    memory: &'a SheetMemory,
    result: f64,
    error: String,
}

impl<'a> FormulaEvaluator<'a> {
    /// Create an evaluator over the given sheet memory
    pub fn new(memory: &'a SheetMemory) -> Self {
        Self {
            memory,
            result: 0.0,
            error: String::new(),
        }
    }

    /// Evaluate a token sequence, overwriting `result` and `error`
    ///
    /// Errors do not short-circuit the scan: later conditions overwrite
    /// earlier ones, and only the last write survives. If the operand stack
    /// does not hold exactly one value once every operator has been applied,
    /// the expression was unbalanced; the result is forced to 0 and the
    /// error to [`messages::MISSING_PARENTHESES`] no matter what the scan
    /// recorded.
    ///
    /// Cell references push the referenced cell's raw cached value; the
    /// referenced cell's own error state is not consulted on this path
    /// (see [`get_cell_value`](Self::get_cell_value) for the propagating
    /// variant).
    pub fn evaluate(&mut self, formula: &[Token]) {
        self.result = 0.0;
        if formula.is_empty() {
            self.error = messages::EMPTY_FORMULA.to_string();
            return;
        }

        let mut operands: Vec<f64> = Vec::new();
        let mut operators: Vec<&str> = Vec::new();
        let mut scan_error = "";

        for token in formula {
            let token = token.as_str();
            if let Some(value) = parse_number(token) {
                operands.push(value);
            } else if self.is_cell_reference(token) {
                match self.memory.get_cell_by_label(token) {
                    Ok(cell) => operands.push(cell.value()),
                    Err(_) => {
                        // In-grammar label outside the grid: stand in a zero
                        // so the scan can continue.
                        operands.push(0.0);
                        scan_error = messages::INVALID_CELL;
                    }
                }
            } else if token == "(" {
                operators.push(token);
            } else if token == ")" {
                while operators.last().map_or(false, |&top| top != "(") {
                    apply_operator(&mut operands, &mut operators, &mut scan_error);
                }
                // Either discards the matching "(" or reports that none exists.
                if operators.pop().is_none() {
                    scan_error = messages::MISSING_PARENTHESES;
                }
            } else {
                while operators
                    .last()
                    .map_or(false, |&top| top != "(" && binds_at_least(top, token))
                {
                    apply_operator(&mut operands, &mut operators, &mut scan_error);
                }
                operators.push(token);
            }
        }

        while !operators.is_empty() {
            apply_operator(&mut operands, &mut operators, &mut scan_error);
        }

        self.error = scan_error.to_string();
        if operands.len() == 1 {
            self.result = operands[0];
        } else {
            // Zero or several leftover operands: the expression was unbalanced.
            self.result = 0.0;
            self.error = messages::MISSING_PARENTHESES.to_string();
        }
    }

    /// Numeric result of the last evaluation (0 when an error forced it)
    pub fn result(&self) -> f64 {
        self.result
    }

    /// Error string of the last evaluation, empty when it succeeded
    pub fn error(&self) -> &str {
        &self.error
    }

    /// Whether a token classifies as a numeric literal
    pub fn is_number(&self, token: &str) -> bool {
        parse_number(token).is_some()
    }

    /// Whether a token is syntactically a cell reference
    pub fn is_cell_reference(&self, token: &str) -> bool {
        Cell::is_valid_cell_label(token)
    }

    /// Resolve a cell reference with full error propagation
    ///
    /// Unlike the dereference inside [`evaluate`](Self::evaluate), this
    /// consults the referenced cell's own state:
    /// - a recorded error other than the empty-formula marker propagates as
    ///   `(0, error)`;
    /// - a cell with no stored formula yields `(0, messages::INVALID_CELL)`;
    /// - otherwise the cached value is returned with an empty error.
    pub fn get_cell_value(&self, token: &str) -> (f64, String) {
        let cell = match self.memory.get_cell_by_label(token) {
            Ok(cell) => cell,
            Err(_) => return (0.0, messages::INVALID_CELL.to_string()),
        };

        let error = cell.error();
        if !error.is_empty() && error != messages::EMPTY_FORMULA {
            return (0.0, error.to_string());
        }

        if cell.formula().is_empty() {
            return (0.0, messages::INVALID_CELL.to_string());
        }

        (cell.value(), String::new())
    }
}

/// Numeric coercion used for token classification
///
/// Follows the tokenizer's convention that an empty or whitespace-only
/// token coerces to zero, so such tokens classify as numbers.
fn parse_number(token: &str) -> Option<f64> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse().ok()
}

/// Operator priority; higher binds tighter
fn precedence(operator: &str) -> Option<u8> {
    match operator {
        "+" | "-" => Some(1),
        "*" | "/" => Some(2),
        _ => None,
    }
}

/// Left-associative reduction test: does the stacked operator bind at least
/// as tightly as the incoming one?
///
/// Tokens outside the precedence table never force an early reduction; they
/// surface when applied instead.
fn binds_at_least(stacked: &str, incoming: &str) -> bool {
    match (precedence(stacked), precedence(incoming)) {
        (Some(stacked), Some(incoming)) => stacked >= incoming,
        _ => false,
    }
}

/// Pop one operator and apply it to the top two operands
///
/// With fewer than two operands available, the operator is discarded and
/// the invalid-number message recorded; the operands are left untouched, so
/// the shrunken stack trips the final balance check in `evaluate`. Division
/// pushes the IEEE quotient even for a zero divisor, recording the
/// divide-by-zero message alongside the computed value.
///
/// # Panics
///
/// Panics if the popped operator is not one of `+ - * /`. Token
/// classification keeps anything else off the operator stack, so reaching
/// that branch is an internal bug, not a formula error.
fn apply_operator(operands: &mut Vec<f64>, operators: &mut Vec<&str>, error: &mut &'static str) {
    if operands.len() < 2 {
        *error = messages::INVALID_NUMBER;
        operators.pop();
        return;
    }
    let (Some(b), Some(a), Some(operator)) = (operands.pop(), operands.pop(), operators.pop())
    else {
        unreachable!("stack sizes checked by callers");
    };

    let value = match operator {
        "+" => a + b,
        "-" => a - b,
        "*" => a * b,
        "/" => {
            if b == 0.0 {
                *error = messages::DIVIDE_BY_ZERO;
            }
            a / b
        }
        other => panic!("unknown operator on operator stack: {other:?}"),
    };
    operands.push(value);
}


#[cfg(test)]
mod properties {
    use super::*;
    use proptest::prelude::*;

    /// Model expression tree; rendered fully parenthesized, the evaluator
    /// must reproduce its value operation for operation.
    #[derive(Debug, Clone)]
    enum Expr {
        Literal(i32),
        Binary(Box<Expr>, char, Box<Expr>),
    }

    impl Expr {
        fn value(&self) -> f64 {
            match self {
                Expr::Literal(n) => f64::from(*n),
                Expr::Binary(a, op, b) => {
                    let (a, b) = (a.value(), b.value());
                    match op {
                        '+' => a + b,
                        '-' => a - b,
                        '*' => a * b,
                        _ => unreachable!("strategy only produces + - *"),
                    }
                }
            }
        }

        fn tokens(&self, out: &mut Vec<Token>) {
            match self {
                Expr::Literal(n) => out.push(n.to_string()),
                Expr::Binary(a, op, b) => {
                    out.push("(".to_string());
                    a.tokens(out);
                    out.push(op.to_string());
                    b.tokens(out);
                    out.push(")".to_string());
                }
            }
        }
    }

    fn expr_strategy() -> impl Strategy<Value = Expr> {
        let literal = (0..100i32).prop_map(Expr::Literal);
        literal.prop_recursive(6, 64, 2, |inner| {
            (
                inner.clone(),
                prop_oneof![Just('+'), Just('-'), Just('*')],
                inner,
            )
                .prop_map(|(a, op, b)| Expr::Binary(Box::new(a), op, Box::new(b)))
        })
    }

    proptest! {
        #[test]
        fn parenthesized_expressions_match_model(expr in expr_strategy()) {
            let memory = SheetMemory::new(1, 1);
            let mut evaluator = FormulaEvaluator::new(&memory);

            let mut formula = Vec::new();
            expr.tokens(&mut formula);
            evaluator.evaluate(&formula);

            prop_assert_eq!(evaluator.error(), "");
            prop_assert_eq!(evaluator.result(), expr.value());
        }
    }
}
