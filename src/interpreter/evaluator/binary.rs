use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
    util::num::i64_to_f64,
};

impl Context {
    /// Evaluates a binary operation between two values.
    ///
    /// Two integers combine as integers, except under `/`, which always
    /// divides as reals. If either operand is a real, both are promoted and
    /// the real form of the operator applies; for `div` that is a real
    /// division truncated toward zero.
    ///
    /// # Errors
    /// Division by zero and integer overflow.
    ///
    /// # Example
    /// ```
    /// use pascalina::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::Value},
    /// };
    ///
    /// let div = Context::eval_binary(BinaryOperator::IntegerDiv,
    ///                                Value::Integer(-7),
    ///                                Value::Integer(2),
    ///                                1);
    /// assert_eq!(div.unwrap(), Value::Integer(-3));
    ///
    /// let slash = Context::eval_binary(BinaryOperator::FloatDiv,
    ///                                  Value::Integer(10),
    ///                                  Value::Integer(4),
    ///                                  1);
    /// assert_eq!(slash.unwrap(), Value::Real(2.5));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: Value,
                       right: Value,
                       line: usize)
                       -> EvalResult<Value> {
        match (left, right) {
            (Value::Integer(a), Value::Integer(b)) => Self::eval_integer_op(op, a, b, line),
            _ => {
                let (a, b) = left.promote_to_real(right);
                Self::eval_real_op(op, a, b, line)
            },
        }
    }

    /// Integer arithmetic. `div` truncates toward zero; `/` leaves the
    /// integers.
    fn eval_integer_op(op: BinaryOperator, a: i64, b: i64, line: usize) -> EvalResult<Value> {
        use BinaryOperator::{Add, FloatDiv, IntegerDiv, Mul, Sub};

        let result = match op {
            Add => a.checked_add(b),
            Sub => a.checked_sub(b),
            Mul => a.checked_mul(b),
            IntegerDiv => {
                if b == 0 {
                    return Err(RuntimeError::DivisionByZero { line });
                }
                a.checked_div(b)
            },
            FloatDiv => {
                return Self::eval_real_op(op, i64_to_f64(a), i64_to_f64(b), line);
            },
        };
        result.map(Value::Integer)
              .ok_or(RuntimeError::Overflow { line })
    }

    /// Real arithmetic.
    fn eval_real_op(op: BinaryOperator, a: f64, b: f64, line: usize) -> EvalResult<Value> {
        use BinaryOperator::{Add, FloatDiv, IntegerDiv, Mul, Sub};

        Ok(Value::Real(match op {
                           Add => a + b,
                           Sub => a - b,
                           Mul => a * b,
                           IntegerDiv | FloatDiv => {
                               if b == 0.0 {
                                   return Err(RuntimeError::DivisionByZero { line });
                               }
                               if op == IntegerDiv { (a / b).trunc() } else { a / b }
                           },
                       }))
    }
}
