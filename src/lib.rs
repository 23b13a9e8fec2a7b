//! Workspace-level integration tests for fibdp live under `tests/`.
