//! BERT sentence encoder (MiniLM-class checkpoints exported from sentence-transformers).

use std::path::Path;

use candle_core::{DType, Device, Tensor};
use candle_nn::VarBuilder;
use candle_transformers::models::bert::{BertModel, Config, DTYPE};
use tokenizers::Tokenizer;
use tracing::{debug, info};

use super::error::EmbeddingError;
use super::fallback::l2_normalize;
use super::model::SentenceModel;
use super::utils::load_batch_tokenizer;
use crate::constants::MODEL_MAX_SEQ_LEN;

/// Mean-pooled, L2-normalized BERT embeddings.
pub struct BertSentenceModel {
    model: BertModel,
    tokenizer: Tokenizer,
    device: Device,
    hidden_size: usize,
    model_id: String,
}

impl std::fmt::Debug for BertSentenceModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BertSentenceModel")
            .field("model_id", &self.model_id)
            .field("device", &format!("{:?}", self.device))
            .field("hidden_size", &self.hidden_size)
            .finish()
    }
}

impl BertSentenceModel {
    /// Loads `config.json`, `model.safetensors` and `tokenizer.json` from `model_dir`.
    pub fn load(model_dir: &Path, model_id: &str, device: Device) -> Result<Self, EmbeddingError> {
        if !model_dir.is_dir() {
            return Err(EmbeddingError::ModelNotFound {
                path: model_dir.to_path_buf(),
            });
        }

        let config_path = model_dir.join("config.json");
        let weights_path = model_dir.join("model.safetensors");
        for required in [&config_path, &weights_path] {
            if !required.exists() {
                return Err(EmbeddingError::ModelLoadFailed {
                    reason: format!("missing {}", required.display()),
                });
            }
        }

        let config_content = std::fs::read_to_string(&config_path)?;
        let config: Config =
            serde_json::from_str(&config_content).map_err(|e| EmbeddingError::ModelLoadFailed {
                reason: format!("Failed to parse config.json: {}", e),
            })?;

        let tokenizer = load_batch_tokenizer(model_dir, MODEL_MAX_SEQ_LEN).map_err(|e| {
            EmbeddingError::TokenizationFailed {
                reason: format!("Failed to load tokenizer: {}", e),
            }
        })?;

        let model = Self::load_weights(&weights_path, &config, &device).map_err(|e| {
            EmbeddingError::ModelLoadFailed {
                reason: format!("Failed to load BERT weights: {}", e),
            }
        })?;

        info!(
            model_id,
            model_dir = %model_dir.display(),
            hidden_size = config.hidden_size,
            "Sentence embedding model loaded"
        );

        Ok(Self {
            model,
            tokenizer,
            device,
            hidden_size: config.hidden_size,
            model_id: model_id.to_string(),
        })
    }

    fn load_weights(
        weights_path: &Path,
        config: &Config,
        device: &Device,
    ) -> candle_core::Result<BertModel> {
        // SAFETY: the safetensors file is memory-mapped read-only and must not be modified
        // while the model is alive.
        let vb = unsafe { VarBuilder::from_mmaped_safetensors(&[weights_path], DTYPE, device)? };

        if vb.contains_tensor("bert.embeddings.word_embeddings.weight") {
            BertModel::load(vb.pp("bert"), config)
        } else {
            BertModel::load(vb, config)
        }
    }

    fn forward_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        let encodings = self
            .tokenizer
            .encode_batch(texts.to_vec(), true)
            .map_err(|e| EmbeddingError::TokenizationFailed {
                reason: e.to_string(),
            })?;

        let ids = encodings
            .iter()
            .map(|enc| Tensor::new(enc.get_ids(), &self.device))
            .collect::<candle_core::Result<Vec<_>>>()?;
        let masks = encodings
            .iter()
            .map(|enc| Tensor::new(enc.get_attention_mask(), &self.device))
            .collect::<candle_core::Result<Vec<_>>>()?;

        let input_ids = Tensor::stack(&ids, 0)?;
        let attention_mask = Tensor::stack(&masks, 0)?;
        let token_type_ids = input_ids.zeros_like()?;

        debug!(
            batch_size = texts.len(),
            seq_len = input_ids.dim(1)?,
            "BERT forward pass"
        );

        // [batch, seq, hidden]
        let hidden = self
            .model
            .forward(&input_ids, &token_type_ids, Some(&attention_mask))?;

        // Mean pooling over attended tokens; [CLS] is always attended so counts >= 1.
        let mask = attention_mask.to_dtype(DType::F32)?.unsqueeze(2)?;
        let summed = hidden.broadcast_mul(&mask)?.sum(1)?;
        let counts = mask.sum(1)?;
        let pooled = summed.broadcast_div(&counts)?;

        let mut rows = pooled.to_vec2::<f32>()?;
        for row in &mut rows {
            l2_normalize(row);
        }
        Ok(rows)
    }
}

impl SentenceModel for BertSentenceModel {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    fn dimension(&self) -> usize {
        self.hidden_size
    }

    fn encode_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        if texts.is_empty() {
            return Ok(vec![]);
        }
        self.forward_batch(texts)
    }
}
