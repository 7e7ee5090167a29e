//! Labelled sample collections for supervised training.
use crate::errors::NetworkError;

use log::warn;
use ndarray::Array2;

use std::collections::BTreeMap;

/// Builds an `n×1` column matrix from `values`.
///
/// # Examples
/// ```
/// use neuroevo_nn::data::column_vector;
///
/// let column = column_vector(&[1.0, 2.0, 3.0]);
/// assert_eq!(column.dim(), (3, 1));
/// assert_eq!(column[[2, 0]], 3.0);
/// ```
pub fn column_vector(values: &[f64]) -> Array2<f64> {
    Array2::from_shape_fn((values.len(), 1), |(i, _)| values[i])
}

/// Returns the `(row, column)` position and value of the
/// largest entry of `matrix`, or `None` if it is empty.
/// NaN entries are never selected unless all entries are NaN.
pub fn max_element(matrix: &Array2<f64>) -> Option<((usize, usize), f64)> {
    matrix
        .indexed_iter()
        .map(|(position, value)| (position, *value))
        .reduce(|best, next| {
            if best.1.is_nan() || next.1 > best.1 {
                next
            } else {
                best
            }
        })
}

/// A single sample: an input column together with either an
/// expected output or a label to generate one from.
#[derive(Clone, Debug)]
pub struct DataElement {
    input: Array2<f64>,
    output: Option<Array2<f64>>,
    label: Option<i64>,
}

impl DataElement {
    pub fn input(&self) -> &Array2<f64> {
        &self.input
    }

    pub fn output(&self) -> Option<&Array2<f64>> {
        self.output.as_ref()
    }

    pub fn label(&self) -> Option<i64> {
        self.label
    }
}

/// Training and test samples for a classification or
/// regression task.
///
/// # Examples
/// ```
/// use neuroevo_nn::data::{column_vector, DataSet};
///
/// let mut data = DataSet::new();
/// data.add_training_label(column_vector(&[0.0, 1.0]), 7);
/// data.add_training_label(column_vector(&[1.0, 0.0]), 3);
/// data.add_test_label(column_vector(&[1.0, 1.0]), 7);
/// data.generate_from_labels().unwrap();
///
/// assert_eq!(data.label_count(), 2);
/// // Labels are ordered, so 7 maps to the second output neuron.
/// assert_eq!(data.test_outputs()[0], column_vector(&[0.0, 1.0]));
/// ```
#[derive(Clone, Debug, Default)]
pub struct DataSet {
    training: Vec<DataElement>,
    test: Vec<DataElement>,
    labels: BTreeMap<i64, usize>,
}

impl DataSet {
    pub fn new() -> DataSet {
        DataSet::default()
    }

    /// Adds a training sample with an explicit expected output.
    pub fn add_training_sample(&mut self, input: Array2<f64>, output: Array2<f64>) {
        self.training.push(DataElement {
            input,
            output: Some(output),
            label: None,
        });
    }

    /// Adds a training sample whose expected output is generated
    /// from `label` by [`generate_from_labels`](DataSet::generate_from_labels).
    pub fn add_training_label(&mut self, input: Array2<f64>, label: i64) {
        self.training.push(DataElement {
            input,
            output: None,
            label: Some(label),
        });
    }

    /// Adds a test sample with an explicit expected output.
    pub fn add_test_sample(&mut self, input: Array2<f64>, output: Array2<f64>) {
        self.test.push(DataElement {
            input,
            output: Some(output),
            label: None,
        });
    }

    /// Adds a labelled test sample.
    pub fn add_test_label(&mut self, input: Array2<f64>, label: i64) {
        self.test.push(DataElement {
            input,
            output: None,
            label: Some(label),
        });
    }

    /// One-hot encodes the labels of every element.
    ///
    /// The distinct training labels, in ascending order, are
    /// mapped to the rows of a column of height [`label_count`].
    ///
    /// # Errors
    /// Fails if an element carries no label, or if a test label
    /// never occurs among the training labels. Outputs are only
    /// written once every element has been checked.
    ///
    /// [`label_count`]: DataSet::label_count
    pub fn generate_from_labels(&mut self) -> Result<(), NetworkError> {
        let mut labels: BTreeMap<i64, usize> = BTreeMap::new();
        for element in &self.training {
            let label = element.label.ok_or(NetworkError::LabelNotSet)?;
            labels.insert(label, 0);
        }
        for (index, slot) in labels.values_mut().enumerate() {
            *slot = index;
        }

        for element in &self.test {
            let label = element.label.ok_or(NetworkError::LabelNotSet)?;
            if !labels.contains_key(&label) {
                warn!("test label {} missing from training labels", label);
                return Err(NetworkError::UnknownLabel(label));
            }
        }

        let count = labels.len();
        for element in self.training.iter_mut().chain(self.test.iter_mut()) {
            if let Some(&index) = element.label.and_then(|l| labels.get(&l)) {
                let mut output = Array2::zeros((count, 1));
                output[[index, 0]] = 1.0;
                element.output = Some(output);
            }
        }

        self.labels = labels;
        Ok(())
    }

    /// Number of distinct labels found by the last
    /// [`generate_from_labels`](DataSet::generate_from_labels).
    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    /// Returns the output neuron assigned to `label`, if any.
    pub fn label_index(&self, label: i64) -> Option<usize> {
        self.labels.get(&label).copied()
    }

    pub fn training_count(&self) -> usize {
        self.training.len()
    }

    pub fn test_count(&self) -> usize {
        self.test.len()
    }

    pub fn training_elements(&self) -> &[DataElement] {
        &self.training
    }

    pub fn test_elements(&self) -> &[DataElement] {
        &self.test
    }

    pub fn training_inputs(&self) -> Vec<Array2<f64>> {
        Self::inputs(&self.training)
    }

    pub fn training_outputs(&self) -> Vec<Array2<f64>> {
        Self::outputs(&self.training, "training")
    }

    pub fn test_inputs(&self) -> Vec<Array2<f64>> {
        Self::inputs(&self.test)
    }

    pub fn test_outputs(&self) -> Vec<Array2<f64>> {
        Self::outputs(&self.test, "test")
    }

    /// Only elements with an expected output are included,
    /// so inputs and outputs line up.
    fn inputs(elements: &[DataElement]) -> Vec<Array2<f64>> {
        elements
            .iter()
            .filter(|e| e.output.is_some())
            .map(|e| e.input.clone())
            .collect()
    }

    fn outputs(elements: &[DataElement], kind: &str) -> Vec<Array2<f64>> {
        let outputs: Vec<Array2<f64>> = elements.iter().filter_map(|e| e.output.clone()).collect();
        if outputs.len() != elements.len() {
            warn!(
                "{} of {} {} elements have no output",
                elements.len() - outputs.len(),
                elements.len(),
                kind
            );
        }
        outputs
    }

    /// Removes every element and label.
    pub fn clear(&mut self) {
        self.training.clear();
        self.test.clear();
        self.labels.clear();
    }
}
