pub mod compile_time {
    pub mod classification {
        /// Maximum classification table entries before a capacity warning
        /// is emitted. Oversized tables still work; the warning flags a
        /// probable configuration mistake.
        pub const MAX_TABLE_ENTRIES: usize = 10_000;
    }

    pub mod lexical {
        /// Maximum lexeme length in bytes before a warning is emitted.
        /// Longer lexemes are still classified.
        pub const MAX_LEXEME_LENGTH: usize = 255;
    }

    pub mod symbols {
        /// Maximum symbol table entries before a capacity warning.
        /// The table itself stays append-only regardless.
        pub const MAX_SYMBOL_ENTRIES: usize = 50_000;
    }

    pub mod logging {
        /// Log buffer size for the in-memory logger.
        pub const LOG_BUFFER_SIZE: usize = 10_000;

        /// Maximum log message length.
        pub const MAX_LOG_MESSAGE_LENGTH: usize = 10_000;
    }
}

#[cfg(test)]
mod tests {
    use super::compile_time::*;

    #[test]
    fn test_limits_are_sane() {
        assert!(classification::MAX_TABLE_ENTRIES > 0);
        assert!(lexical::MAX_LEXEME_LENGTH > 0);
        assert!(symbols::MAX_SYMBOL_ENTRIES >= classification::MAX_TABLE_ENTRIES);
        assert!(logging::LOG_BUFFER_SIZE >= 100);
    }
}
