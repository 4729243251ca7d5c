//! Tiny random-weight checkpoints written to disk for model tests.

use std::path::Path;

use candle_core::{DType, Device, IndexOp, Module, Tensor};
use candle_nn::{VarBuilder, VarMap};
use candle_transformers::models::bert::{BertModel, Config as BertConfig};
use candle_transformers::models::xlm_roberta::{
    Config as RobertaConfig, XLMRobertaForSequenceClassification,
};

use super::utils::{CONFIG_FILE, TOKENIZER_FILE, WEIGHTS_FILE};

pub const VOCAB: &[&str] = &[
    "<s>", "<pad>", "</s>", "[UNK]", "hello", "world", "great", "news", "bad", "day",
];

pub const LABELS: [&str; 3] = ["negative", "neutral", "positive"];

pub fn token_id(word: &str) -> u32 {
    VOCAB
        .iter()
        .position(|w| *w == word)
        .expect("word in fixture vocab") as u32
}

pub fn write_tokenizer(dir: &Path) {
    let vocab: serde_json::Map<String, serde_json::Value> = VOCAB
        .iter()
        .enumerate()
        .map(|(i, w)| (w.to_string(), serde_json::json!(i)))
        .collect();

    let tokenizer = serde_json::json!({
        "version": "1.0",
        "truncation": null,
        "padding": null,
        "added_tokens": [],
        "normalizer": null,
        "pre_tokenizer": { "type": "Whitespace" },
        "post_processor": null,
        "decoder": null,
        "model": { "type": "WordLevel", "vocab": vocab, "unk_token": "[UNK]" }
    });

    std::fs::write(dir.join(TOKENIZER_FILE), tokenizer.to_string()).expect("write tokenizer");
}

fn common_config(pad_token_id: u32) -> serde_json::Value {
    serde_json::json!({
        "vocab_size": VOCAB.len(),
        "hidden_size": 8,
        "num_hidden_layers": 1,
        "num_attention_heads": 2,
        "intermediate_size": 16,
        "hidden_act": "gelu",
        "hidden_dropout_prob": 0.1,
        "attention_probs_dropout_prob": 0.1,
        "max_position_embeddings": 16,
        "type_vocab_size": 1,
        "initializer_range": 0.02,
        "layer_norm_eps": 1e-5,
        "pad_token_id": pad_token_id,
        "position_embedding_type": "absolute",
        "id2label": { "0": LABELS[0], "1": LABELS[1], "2": LABELS[2] }
    })
}

fn write_config(dir: &Path, config: &serde_json::Value) {
    std::fs::write(dir.join(CONFIG_FILE), config.to_string()).expect("write config");
}

/// RoBERTa sequence classifier; returns the in-memory reference model.
pub fn write_roberta_classifier(dir: &Path) -> XLMRobertaForSequenceClassification {
    let mut config = common_config(1);
    config["model_type"] = serde_json::json!("roberta");
    write_config(dir, &config);

    let parsed: RobertaConfig = serde_json::from_value(config).expect("roberta config");
    let varmap = VarMap::new();
    let vb = VarBuilder::from_varmap(&varmap, DType::F32, &Device::Cpu);
    let model =
        XLMRobertaForSequenceClassification::new(LABELS.len(), &parsed, vb).expect("roberta");

    varmap.save(dir.join(WEIGHTS_FILE)).expect("save weights");
    write_tokenizer(dir);
    model
}

/// BERT classifier with `bert.` prefix and pooler head; returns the reference
/// forward as a closure over the in-memory weights.
pub fn write_bert_classifier(dir: &Path) -> impl Fn(&Tensor, &Tensor, &Tensor) -> Tensor {
    let config = common_config(0);
    write_config(dir, &config);

    let parsed: BertConfig = serde_json::from_value(config).expect("bert config");
    let varmap = VarMap::new();
    let vb = VarBuilder::from_varmap(&varmap, DType::F32, &Device::Cpu);
    let bert = BertModel::load(vb.pp("bert"), &parsed).expect("bert");
    let pooler = candle_nn::linear(8, 8, vb.pp("bert.pooler.dense")).expect("pooler");
    let classifier = candle_nn::linear(8, LABELS.len(), vb.pp("classifier")).expect("head");

    varmap.save(dir.join(WEIGHTS_FILE)).expect("save weights");
    write_tokenizer(dir);

    move |ids: &Tensor, type_ids: &Tensor, mask: &Tensor| -> Tensor {
        let hidden = bert.forward(ids, type_ids, Some(mask)).expect("forward");
        let cls = hidden.i((.., 0, ..)).expect("cls");
        let pooled = pooler.forward(&cls).and_then(|t| t.tanh()).expect("pool");
        classifier.forward(&pooled).expect("logits")
    }
}

/// Unprefixed BERT encoder (sentence-transformers layout).
pub fn write_bert_encoder(dir: &Path) -> BertModel {
    let config = common_config(0);
    write_config(dir, &config);

    let parsed: BertConfig = serde_json::from_value(config).expect("bert config");
    let varmap = VarMap::new();
    let vb = VarBuilder::from_varmap(&varmap, DType::F32, &Device::Cpu);
    let model = BertModel::load(vb, &parsed).expect("bert");

    varmap.save(dir.join(WEIGHTS_FILE)).expect("save weights");
    write_tokenizer(dir);
    model
}

/// `[1, n]` u32 tensor.
pub fn row(values: &[u32]) -> Tensor {
    Tensor::new(values, &Device::Cpu)
        .and_then(|t| t.unsqueeze(0))
        .expect("row tensor")
}

pub fn to_flat_vec(t: &Tensor) -> Vec<f32> {
    t.flatten_all()
        .and_then(|t| t.to_vec1::<f32>())
        .expect("flatten")
}

pub fn max_abs_diff(a: &[f32], b: &[f32]) -> f32 {
    assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f32::max)
}
