use log::trace;

use super::error::ArithmeticError;
use crate::ast::{Expression, Operator};

/// Reduces a tree to its value with checked 64-bit arithmetic. Division
/// truncates toward zero.
pub fn evaluate(expr: &Expression) -> Result<i64, ArithmeticError> {
    let value = match expr {
        Expression::Number(n) => *n,
        Expression::Prefix(operand) => {
            let v = evaluate(operand)?;
            v.checked_neg()
                .ok_or_else(|| ArithmeticError::Overflow(format!("-({})", v)))?
        }
        Expression::Infix(lhs, op, rhs) => {
            let l = evaluate(lhs)?;
            let r = evaluate(rhs)?;
            apply_binary(l, *op, r)?
        }
    };
    trace!("{} => {}", expr, value);
    Ok(value)
}

fn apply_binary(l: i64, op: Operator, r: i64) -> Result<i64, ArithmeticError> {
    let result = match op {
        Operator::Add => l.checked_add(r),
        Operator::Sub => l.checked_sub(r),
        Operator::Mul => l.checked_mul(r),
        Operator::Div => {
            if r == 0 {
                return Err(ArithmeticError::DivisionByZero);
            }
            // only i64::MIN / -1 can fail here
            l.checked_div(r)
        }
    };
    result.ok_or_else(|| ArithmeticError::Overflow(format!("{} {} {}", l, op, r)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(n: i64) -> Expression {
        Expression::Number(n)
    }

    #[test]
    fn test_number() {
        assert_eq!(evaluate(&num(5)), Ok(5));
    }

    #[test]
    fn test_binary_operators() {
        assert_eq!(evaluate(&Expression::infix(num(2), Operator::Add, num(3))), Ok(5));
        assert_eq!(evaluate(&Expression::infix(num(2), Operator::Sub, num(3))), Ok(-1));
        assert_eq!(evaluate(&Expression::infix(num(2), Operator::Mul, num(3))), Ok(6));
        assert_eq!(evaluate(&Expression::infix(num(7), Operator::Div, num(2))), Ok(3));
    }

    #[test]
    fn test_division_truncates_toward_zero() {
        let neg_seven = Expression::prefix(num(7));
        assert_eq!(
            evaluate(&Expression::infix(neg_seven, Operator::Div, num(2))),
            Ok(-3)
        );
        assert_eq!(
            evaluate(&Expression::infix(num(7), Operator::Div, Expression::prefix(num(2)))),
            Ok(-3)
        );
    }

    #[test]
    fn test_negation() {
        assert_eq!(evaluate(&Expression::prefix(num(4))), Ok(-4));
        assert_eq!(
            evaluate(&Expression::prefix(Expression::prefix(num(4)))),
            Ok(4)
        );
    }

    #[test]
    fn test_division_by_zero() {
        let zero = Expression::infix(num(1), Operator::Sub, num(1));
        assert_eq!(
            evaluate(&Expression::infix(num(1), Operator::Div, zero)),
            Err(ArithmeticError::DivisionByZero)
        );
    }

    #[test]
    fn test_overflow() {
        assert!(matches!(
            evaluate(&Expression::infix(num(i64::MAX), Operator::Add, num(1))),
            Err(ArithmeticError::Overflow(_))
        ));
        assert!(matches!(
            evaluate(&Expression::infix(num(i64::MAX), Operator::Mul, num(2))),
            Err(ArithmeticError::Overflow(_))
        ));

        let min = Expression::infix(Expression::prefix(num(i64::MAX)), Operator::Sub, num(1));
        assert_eq!(evaluate(&min), Ok(i64::MIN));
        assert_eq!(
            evaluate(&Expression::prefix(min.clone())),
            Err(ArithmeticError::Overflow(format!("-({})", i64::MIN)))
        );
        assert_eq!(
            evaluate(&Expression::infix(min, Operator::Div, Expression::prefix(num(1)))),
            Err(ArithmeticError::Overflow(format!("{} / -1", i64::MIN)))
        );
    }
}
