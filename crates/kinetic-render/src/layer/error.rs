/// Layer registry misuse. The registry is unchanged when one is returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayerError {
    #[error("layer \"{0}\" already added")]
    Duplicate(String),

    #[error("layer \"{id}\" has invalid scale {scale}; expected a finite value > 0")]
    InvalidScale { id: String, scale: f32 },

    #[error("layer \"{id}\": surface creation failed: {reason}")]
    Surface { id: String, reason: String },
}
