#[cfg(test)]
mod tests {
    use crate::ops::arithmetic::mul_op;
    use crate::ops::Op;
    use crate::value::Value;

    #[test]
    fn test_mul_forward() {
        let a = Value::new(2.0f64);
        let b = Value::new(-3.0f64);
        let c = mul_op(&a, &b);
        assert_eq!(c.data(), -6.0);
        assert_eq!(c.grad(), 0.0);
        assert_eq!(c.op(), Some(Op::Mul));
    }

    #[test]
    fn test_mul_operator_sugar() {
        let a = Value::new(0.5f64);
        let b = Value::new(8.0f64);
        let c = &a * &b;
        assert_eq!(c.data(), 4.0);
        assert_eq!(c.op(), Some(Op::Mul));
    }

    #[test]
    fn test_mul_by_negative_one_negates() {
        // Negation-as-multiply is how drivers build residuals, so pin it down.
        let a = Value::new(7.25f64);
        let neg_one = Value::new(-1.0f64);
        let negated = mul_op(&a, &neg_one);
        assert_eq!(negated.data(), -7.25);
    }

    #[test]
    fn test_mul_same_node_squares() {
        let a = Value::new(-4.0f64);
        let squared = mul_op(&a, &a);
        assert_eq!(squared.data(), 16.0);
        assert_eq!(squared.first(), squared.second());
    }
}
