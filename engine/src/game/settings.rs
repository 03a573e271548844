use super::types::FirstPlayer;

/// Parameters for one game session, validated before the session starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GomokuSessionSettings {
    pub board_size: usize,
    pub win_length: usize,
    pub search_depth: usize,
    pub first_player: FirstPlayer,
}

impl Default for GomokuSessionSettings {
    fn default() -> Self {
        Self {
            board_size: 8,
            win_length: 5,
            search_depth: 5,
            first_player: FirstPlayer::Computer,
        }
    }
}

impl GomokuSessionSettings {
    pub fn validate(&self) -> Result<(), String> {
        if self.board_size < 5 || self.board_size > 20 {
            return Err("Board size must be between 5 and 20".to_string());
        }
        if self.win_length < 3 {
            return Err("Win length must be at least 3".to_string());
        }
        if self.win_length > self.board_size {
            return Err(format!(
                "Win length ({}) cannot exceed board size ({})",
                self.win_length, self.board_size
            ));
        }
        if self.search_depth < 1 || self.search_depth > 8 {
            return Err("Search depth must be between 1 and 8".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(GomokuSessionSettings::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut settings = GomokuSessionSettings {
            board_size: 4,
            ..GomokuSessionSettings::default()
        };
        assert!(settings.validate().is_err());

        settings.board_size = 8;
        settings.win_length = 9;
        assert!(settings.validate().is_err());

        settings.win_length = 5;
        settings.search_depth = 0;
        assert!(settings.validate().is_err());
    }
}
