//! Workspace-level integration test harness for fibseq.
