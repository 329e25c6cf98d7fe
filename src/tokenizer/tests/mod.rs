//! Tests for the field tokenizer
