//! Shared test utilities, public so integration tests can use them
