use super::token::{Operator, Token};
use super::EvalError;

/// Reorder infix tokens into postfix (RPN) with the shunting-yard algorithm.
///
/// The output holds only numbers and operators. Operators of equal
/// precedence pop each other, which makes all four left-associative.
///
/// # Errors
///
/// Returns `UnbalancedParens` when a `)` has no matching `(` or a `(` is
/// never closed.
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<Token>, EvalError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(_) => output.push(token.clone()),
            Token::Operator(op) => {
                while let Some(Token::Operator(top)) = stack.last() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    output.push(Token::Operator(*top));
                    stack.pop();
                }
                stack.push(token.clone());
            }
            Token::LeftParen => stack.push(Token::LeftParen),
            Token::RightParen => loop {
                match stack.pop() {
                    Some(Token::LeftParen) => break,
                    Some(other) => output.push(other),
                    None => return Err(EvalError::UnbalancedParens),
                }
            },
        }
    }

    while let Some(top) = stack.pop() {
        match top {
            Token::LeftParen | Token::RightParen => return Err(EvalError::UnbalancedParens),
            other => output.push(other),
        }
    }

    Ok(output)
}

/// Reduce a postfix sequence to a single value.
///
/// For each operator the first pop is the right operand. Division checks for
/// a zero divisor before dividing, so `-1/0` and `0/0` fail the same way.
///
/// # Errors
///
/// - `InvalidNumber` when a literal does not parse to a finite `f64`
/// - `MalformedExpression` when an operator lacks operands, a paren survived,
///   or the stack does not end with exactly one value
/// - `DivisionByZero`
pub fn eval_postfix(postfix: &[Token]) -> Result<f64, EvalError> {
    let mut stack: Vec<f64> = Vec::with_capacity(postfix.len());

    for token in postfix {
        match token {
            Token::Number(text) => {
                let value: f64 = text
                    .parse()
                    .map_err(|_| EvalError::InvalidNumber(text.clone()))?;
                if !value.is_finite() {
                    return Err(EvalError::InvalidNumber(text.clone()));
                }
                stack.push(value);
            }
            Token::Operator(op) => {
                let (Some(b), Some(a)) = (stack.pop(), stack.pop()) else {
                    return Err(EvalError::MalformedExpression);
                };
                stack.push(apply(*op, a, b)?);
            }
            Token::LeftParen | Token::RightParen => return Err(EvalError::MalformedExpression),
        }
    }

    match stack.as_slice() {
        [value] => Ok(*value),
        _ => Err(EvalError::MalformedExpression),
    }
}

fn apply(op: Operator, a: f64, b: f64) -> Result<f64, EvalError> {
    match op {
        Operator::Add => Ok(a + b),
        Operator::Sub => Ok(a - b),
        Operator::Mul => Ok(a * b),
        Operator::Div => {
            if b == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            Ok(a / b)
        }
    }
}
