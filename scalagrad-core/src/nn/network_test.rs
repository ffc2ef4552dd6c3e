#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::error::ScalaGradError;
    use crate::nn::network::Network;
    use crate::value::Value;

    fn leaves(data: &[f64]) -> Vec<Value<f64>> {
        data.iter().copied().map(Value::new).collect()
    }

    #[test]
    fn test_new_rejects_single_width_architecture() {
        let mut rng = StdRng::seed_from_u64(20);
        let result: Result<Network<f64>, _> = Network::new(&[5], &mut rng);
        assert_eq!(
            result.err(),
            Some(ScalaGradError::InvalidArchitecture { widths: vec![5] })
        );
    }

    #[test]
    fn test_new_rejects_empty_and_zero_width_architectures() {
        let mut rng = StdRng::seed_from_u64(21);
        assert!(Network::<f64>::new(&[], &mut rng).is_err());
        assert!(Network::<f64>::new(&[3, 0, 1], &mut rng).is_err());
    }

    #[test]
    fn test_new_builds_one_layer_per_width_pair() {
        let mut rng = StdRng::seed_from_u64(22);
        let network: Network<f64> = Network::new(&[3, 4, 4, 1], &mut rng).unwrap();
        assert_eq!(network.layers().len(), 3);

        let widths: Vec<(usize, usize)> = network
            .layers()
            .iter()
            .map(|layer| (layer.num_inputs(), layer.num_outputs()))
            .collect();
        assert_eq!(widths, vec![(3, 4), (4, 4), (4, 1)]);
        assert_eq!(network.num_inputs(), 3);
        assert_eq!(network.num_outputs(), 1);

        // (3*4 + 4) + (4*4 + 4) + (4*1 + 1)
        assert_eq!(network.parameters().len(), 41);
    }

    #[test]
    fn test_forward_threads_layer_outputs() {
        let mut rng = StdRng::seed_from_u64(23);
        let network: Network<f64> = Network::new(&[3, 4, 4, 1], &mut rng).unwrap();
        let inputs = leaves(&[2.0, 3.0, -1.0]);

        let outputs = network.forward(&inputs).unwrap();
        assert_eq!(outputs.len(), 1);
        assert!(outputs[0].data() > -1.0 && outputs[0].data() < 1.0);
        assert!(!outputs[0].is_leaf());
    }

    #[test]
    fn test_forward_rejects_wrong_input_width() {
        let mut rng = StdRng::seed_from_u64(24);
        let network: Network<f64> = Network::new(&[3, 2], &mut rng).unwrap();
        let inputs = leaves(&[1.0]);
        assert_eq!(
            network.forward(&inputs),
            Err(ScalaGradError::InputWidthMismatch {
                expected: 3,
                actual: 1,
            })
        );
    }

    #[test]
    fn test_same_seed_builds_identical_parameters() {
        let mut rng_a = StdRng::seed_from_u64(99);
        let mut rng_b = StdRng::seed_from_u64(99);
        let net_a: Network<f64> = Network::new(&[2, 3, 1], &mut rng_a).unwrap();
        let net_b: Network<f64> = Network::new(&[2, 3, 1], &mut rng_b).unwrap();

        let data_a: Vec<f64> = net_a.parameters().iter().map(|p| p.data()).collect();
        let data_b: Vec<f64> = net_b.parameters().iter().map(|p| p.data()).collect();
        assert_eq!(data_a, data_b);
    }
}
