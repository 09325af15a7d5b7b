//! Workspace-level integration tests for fibeval live in `tests/`.
