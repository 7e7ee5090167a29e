use super::{Layer, Network};
use crate::errors::NetworkError;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Serialized form of a [`Network`]. The input layer
/// carries no parameters and is rebuilt from `structure`.
#[derive(Debug, Serialize, Deserialize)]
struct NetworkRecord {
    structure: Vec<usize>,
    layers: Vec<LayerRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct LayerRecord {
    weights: Vec<Vec<f64>>,
    biases: Vec<f64>,
}

impl From<&Network> for NetworkRecord {
    fn from(network: &Network) -> Self {
        NetworkRecord {
            structure: network.structure.clone(),
            layers: network.layers[1..]
                .iter()
                .map(|layer| LayerRecord {
                    weights: layer.weights().rows().into_iter().map(|r| r.to_vec()).collect(),
                    biases: layer.biases().iter().copied().collect(),
                })
                .collect(),
        }
    }
}

impl TryFrom<NetworkRecord> for Network {
    type Error = NetworkError;

    fn try_from(record: NetworkRecord) -> Result<Self, Self::Error> {
        let NetworkRecord { structure, layers } = record;
        if structure.is_empty() || structure.contains(&0) {
            return Err(NetworkError::InvalidRecord(format!(
                "structure {:?} contains no or empty layers",
                structure
            )));
        }
        if layers.len() + 1 != structure.len() {
            return Err(NetworkError::InvalidRecord(format!(
                "{} parameter layers for structure {:?}",
                layers.len(),
                structure
            )));
        }

        let mut built = Vec::with_capacity(structure.len());
        built.push(Layer::input(structure[0]));
        for (i, layer) in layers.iter().enumerate() {
            if layer.weights.len() != structure[i + 1] {
                return Err(NetworkError::InvalidRecord(format!(
                    "layer {} has {} weight rows, expected {}",
                    i + 1,
                    layer.weights.len(),
                    structure[i + 1]
                )));
            }
            let parameters = Layer::from_parameters(structure[i], &layer.weights, &layer.biases)
                .map_err(|e| NetworkError::InvalidRecord(format!("layer {}: {}", i + 1, e)))?;
            built.push(parameters);
        }

        Ok(Network::from_layers(structure, built))
    }
}

impl Serialize for Network {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        NetworkRecord::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Network {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let record = NetworkRecord::deserialize(deserializer)?;
        Network::try_from(record).map_err(serde::de::Error::custom)
    }
}

impl Network {
    /// Writes the network's structure and parameters
    /// to `path` as JSON.
    ///
    /// # Errors
    /// Fails if the file cannot be created or written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), NetworkError> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, &NetworkRecord::from(self))?;
        writer.flush()?;
        Ok(())
    }

    /// Reads a network written by [`save`](Network::save).
    /// The loaded network uses the default cost function.
    ///
    /// # Errors
    /// Fails if the file cannot be read, is not valid JSON,
    /// or describes an inconsistent network.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Network, NetworkError> {
        let reader = BufReader::new(File::open(path)?);
        let record: NetworkRecord = serde_json::from_reader(reader)?;
        Network::try_from(record)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn network() -> Network {
        Network::with_rng(&[3, 4, 2], &mut StdRng::seed_from_u64(5)).unwrap()
    }

    #[test]
    fn json_round_trip_is_lossless() {
        let original = network();
        let json = serde_json::to_string(&original).unwrap();
        let restored: Network = serde_json::from_str(&json).unwrap();
        assert!(original.same_parameters(&restored));
    }

    #[test]
    fn save_and_load() {
        let original = network();
        let path = std::env::temp_dir().join(format!(
            "neuroevo-nn-save-and-load-{}.json",
            std::process::id()
        ));
        original.save(&path).unwrap();
        let restored = Network::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(original.same_parameters(&restored));
        assert_eq!(restored.structure(), &[3, 4, 2]);
    }

    #[test]
    fn load_missing_file() {
        let path = std::env::temp_dir().join("neuroevo-nn-does-not-exist.json");
        assert!(matches!(Network::load(&path), Err(NetworkError::Io(_))));
    }

    #[test]
    fn inconsistent_records_are_rejected() {
        let too_few_layers = r#"{"structure": [2, 2, 1], "layers": [
            {"weights": [[1.0, 1.0], [1.0, 1.0]], "biases": [0.0, 0.0]}
        ]}"#;
        let short_row = r#"{"structure": [2, 1], "layers": [
            {"weights": [[1.0]], "biases": [0.0]}
        ]}"#;
        let missing_bias = r#"{"structure": [2, 1], "layers": [
            {"weights": [[1.0, 1.0]], "biases": []}
        ]}"#;

        for json in [too_few_layers, short_row, missing_bias] {
            let record: NetworkRecord = serde_json::from_str(json).unwrap();
            assert!(matches!(
                Network::try_from(record),
                Err(NetworkError::InvalidRecord(_))
            ));
            assert!(serde_json::from_str::<Network>(json).is_err());
        }
    }
}
