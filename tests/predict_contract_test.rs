//! Integration tests for the prediction contract.

use predecir::dataset;
use predecir::model::ModelBundle;

#[test]
fn test_every_reference_sample_gets_a_known_label() {
    let ds = dataset::reference();
    let bundle = ModelBundle::train(&ds).expect("operation should succeed");

    for row in &ds.features {
        let prediction = bundle.predict(row).expect("operation should succeed");
        assert!(bundle.labels().contains(&prediction.label));

        let probs = prediction.probabilities.expect("gaussian nb estimates probabilities");
        assert_eq!(probs.len(), bundle.labels().len());
        let sum: f32 = probs.values().sum();
        assert!((sum - 1.0).abs() < 1e-6, "probability mass was {sum}");
        assert!(probs.values().all(|&p| (0.0..=1.0).contains(&p)));
    }
}

#[test]
fn test_training_accuracy_on_reference_data() {
    // Gaussian NB famously fits iris well; anything below 90% on the
    // training data itself means the model or data is broken.
    let ds = dataset::reference();
    let bundle = ModelBundle::train(&ds).expect("operation should succeed");

    let correct = ds
        .features
        .iter()
        .zip(&ds.targets)
        .filter(|(row, &target)| {
            bundle.predict(row).expect("operation should succeed").label
                == ds.target_names[target]
        })
        .count();

    assert!(correct >= 135, "only {correct}/150 reference samples classified correctly");
}

#[test]
fn test_canonical_setosa_example() {
    let bundle = ModelBundle::train(&dataset::reference()).expect("operation should succeed");
    let prediction = bundle.predict(&[5.1, 3.5, 1.4, 0.2]).expect("operation should succeed");

    assert_eq!(prediction.label, "setosa");
    let probs = prediction.probabilities.expect("gaussian nb estimates probabilities");
    assert!(probs["setosa"] > 0.9, "setosa mass was {}", probs["setosa"]);
}

#[test]
fn test_training_twice_is_deterministic() {
    let ds = dataset::reference();
    let a = ModelBundle::train(&ds).expect("operation should succeed");
    let b = ModelBundle::train(&ds).expect("operation should succeed");

    for row in ds.features.iter().step_by(7) {
        let pa = a.predict(row).expect("operation should succeed");
        let pb = b.predict(row).expect("operation should succeed");
        assert_eq!(pa.label, pb.label);
        assert_eq!(pa.probabilities, pb.probabilities);
    }
}
