#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::error::ScalaGradError;
    use crate::nn::layer::Layer;
    use crate::value::Value;

    fn leaves(data: &[f64]) -> Vec<Value<f64>> {
        data.iter().copied().map(Value::new).collect()
    }

    #[test]
    fn test_layer_widths() {
        let mut rng = StdRng::seed_from_u64(10);
        let layer: Layer<f64> = Layer::new(3, 4, &mut rng);
        assert_eq!(layer.num_inputs(), 3);
        assert_eq!(layer.num_outputs(), 4);
        assert_eq!(layer.neurons().len(), 4);
        // 4 neurons * (3 weights + 1 bias)
        assert_eq!(layer.parameters().len(), 16);
    }

    #[test]
    fn test_forward_applies_each_neuron_to_the_shared_input() {
        let mut rng = StdRng::seed_from_u64(11);
        let layer: Layer<f64> = Layer::new(2, 3, &mut rng);
        let inputs = leaves(&[0.5, -0.5]);

        let outputs = layer.forward(&inputs).unwrap();
        assert_eq!(outputs.len(), 3);
        for (neuron, output) in layer.neurons().iter().zip(&outputs) {
            let individually = neuron.forward(&inputs).unwrap();
            assert_relative_eq!(output.data(), individually.data(), max_relative = 1e-12);
        }
    }

    #[test]
    fn test_forward_propagates_width_mismatch() {
        let mut rng = StdRng::seed_from_u64(12);
        let layer: Layer<f64> = Layer::new(2, 3, &mut rng);
        let inputs = leaves(&[1.0, 2.0, 3.0]);
        assert_eq!(
            layer.forward(&inputs),
            Err(ScalaGradError::InputWidthMismatch {
                expected: 2,
                actual: 3,
            })
        );
    }
}
