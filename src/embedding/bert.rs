use std::path::Path;
use std::sync::Arc;

use candle::{DType, Device, Result, Tensor};
use candle_core as candle;
use candle_core::IndexOp;
use candle_nn::{Linear, Module, VarBuilder};
use candle_transformers::models::bert::{BertModel, Config};
use candle_transformers::models::xlm_roberta::{
    Config as RobertaConfig, XLMRobertaForSequenceClassification,
};
use serde::de::DeserializeOwned;

use super::utils::ModelFiles;

const ROBERTA_MARKER_TENSOR: &str = "roberta.embeddings.word_embeddings.weight";
const BERT_MARKER_TENSOR: &str = "bert.embeddings.word_embeddings.weight";

/// Classification heads found on BERT checkpoints.
enum ClassifierHead {
    /// `bert.pooler.dense` + tanh, then `classifier`.
    Pooled { pooler: Linear, classifier: Linear },
    /// `classifier` applied directly to the CLS state.
    Direct { classifier: Linear },
}

impl ClassifierHead {
    fn forward(&self, cls: &Tensor) -> Result<Tensor> {
        match self {
            ClassifierHead::Pooled { pooler, classifier } => {
                classifier.forward(&pooler.forward(cls)?.tanh()?)
            }
            ClassifierHead::Direct { classifier } => classifier.forward(cls),
        }
    }
}

enum BertForSequenceClassificationImpl {
    Bert {
        bert: BertModel,
        head: ClassifierHead,
    },
    /// RoBERTa offsets positions past `pad_token_id` and skips padding, which
    /// the plain BERT embeddings do not; the XLM-R model handles both.
    Roberta(XLMRobertaForSequenceClassification),
}

impl BertForSequenceClassificationImpl {
    fn load(vb: VarBuilder, config_json: &str, num_labels: usize) -> Result<Self> {
        if vb.contains_tensor(ROBERTA_MARKER_TENSOR) {
            let config: RobertaConfig = parse_config(config_json)?;
            let model = XLMRobertaForSequenceClassification::new(num_labels, &config, vb)?;
            return Ok(Self::Roberta(model));
        }

        let config: Config = parse_config(config_json)?;
        let hidden = config.hidden_size;

        let (bert, pooler_vb) = if vb.contains_tensor(BERT_MARKER_TENSOR) {
            (BertModel::load(vb.pp("bert"), &config)?, vb.pp("bert.pooler.dense"))
        } else {
            (BertModel::load(vb.clone(), &config)?, vb.pp("pooler.dense"))
        };

        let classifier = candle_nn::linear(hidden, num_labels, vb.pp("classifier"))?;
        let head = if pooler_vb.contains_tensor("weight") {
            ClassifierHead::Pooled {
                pooler: candle_nn::linear(hidden, hidden, pooler_vb)?,
                classifier,
            }
        } else {
            ClassifierHead::Direct { classifier }
        };

        Ok(Self::Bert { bert, head })
    }

    fn forward(
        &self,
        input_ids: &Tensor,
        token_type_ids: &Tensor,
        attention_mask: Option<&Tensor>,
    ) -> Result<Tensor> {
        match self {
            Self::Bert { bert, head } => {
                let output = bert.forward(input_ids, token_type_ids, attention_mask)?;
                let cls_token = output.i((.., 0, ..))?;
                head.forward(&cls_token)
            }
            Self::Roberta(model) => {
                let attention_mask = match attention_mask {
                    Some(mask) => mask.clone(),
                    None => input_ids.ones_like()?,
                };
                model.forward(input_ids, &attention_mask, token_type_ids)
            }
        }
    }
}

fn parse_config<T: DeserializeOwned>(config_json: &str) -> Result<T> {
    serde_json::from_str(config_json)
        .map_err(|e| candle::Error::Msg(format!("Failed to parse config: {}", e)))
}

fn mmap_weights(weights: &Path, device: &Device) -> Result<VarBuilder<'static>> {
    unsafe { VarBuilder::from_mmaped_safetensors(&[weights], DType::F32, device) }
}

/// Sequence classifier over a BERT or RoBERTa encoder.
///
/// Checkpoints with `roberta.*` tensors load as RoBERTa; `bert.*` or
/// unprefixed tensors load as BERT with a pooled or direct head.
///
/// Cheap to clone; clones share the loaded weights.
#[derive(Clone)]
pub struct BertSequenceClassifier(Arc<BertForSequenceClassificationImpl>);

impl BertSequenceClassifier {
    pub fn load(files: &ModelFiles, num_labels: usize, device: &Device) -> Result<Self> {
        let config_json = std::fs::read_to_string(&files.config)?;
        let vb = mmap_weights(&files.weights, device)?;

        let model = BertForSequenceClassificationImpl::load(vb, &config_json, num_labels)?;

        Ok(Self(Arc::new(model)))
    }

    /// Returns raw logits with shape `[batch, num_labels]`.
    pub fn forward(
        &self,
        input_ids: &Tensor,
        token_type_ids: &Tensor,
        attention_mask: Option<&Tensor>,
    ) -> Result<Tensor> {
        self.0.forward(input_ids, token_type_ids, attention_mask)
    }
}

/// Plain BERT encoder used for sentence embeddings.
///
/// Only the BERT architecture is supported (MiniLM, BGE, E5 and similar
/// sentence-transformers exports). MPNet checkpoints such as
/// `all-mpnet-base-v2` fail at load.
#[derive(Clone)]
pub struct BertEncoder {
    model: Arc<BertModel>,
    hidden_size: usize,
}

impl BertEncoder {
    pub fn load(files: &ModelFiles, device: &Device) -> Result<Self> {
        let config: Config = parse_config(&std::fs::read_to_string(&files.config)?)?;
        let vb = mmap_weights(&files.weights, device)?;

        // sentence-transformers exports are unprefixed; raw HF exports nest under `bert.`
        let model = if vb.contains_tensor(BERT_MARKER_TENSOR) {
            BertModel::load(vb.pp("bert"), &config)?
        } else {
            BertModel::load(vb, &config)?
        };

        Ok(Self {
            model: Arc::new(model),
            hidden_size: config.hidden_size,
        })
    }

    pub fn hidden_size(&self) -> usize {
        self.hidden_size
    }

    /// Returns token states with shape `[batch, seq_len, hidden_size]`.
    pub fn forward(
        &self,
        input_ids: &Tensor,
        token_type_ids: &Tensor,
        attention_mask: Option<&Tensor>,
    ) -> Result<Tensor> {
        self.model
            .forward(input_ids, token_type_ids, attention_mask)
    }
}
