//! Tests for turning builder instructions into a DAG
//!
//! Covers heights, edge recording, and out-of-order submission.
