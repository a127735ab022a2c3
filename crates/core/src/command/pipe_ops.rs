//! `source | command` composition operators
//!
//! Sugar over [`CommandBuilder::with_standard_input`]: piping replaces the
//! command's standard input source entirely, so `a | (b | cmd)` is just
//! `b | cmd`.

use std::ops::BitOr;

use crate::pipes::InputSource;

use super::buffered::BufferedCommand;
use super::builder::CommandBuilder;
use super::commander::Commander;
use super::raw::RawCommand;

macro_rules! pipe_operators {
    ($($command:ty),+ $(,)?) => {
        $(
            impl BitOr<$command> for InputSource {
                type Output = $command;

                fn bitor(self, command: $command) -> $command {
                    command.with_standard_input(self)
                }
            }

            impl BitOr<$command> for &str {
                type Output = $command;

                fn bitor(self, command: $command) -> $command {
                    InputSource::from_string(self) | command
                }
            }

            impl BitOr<$command> for String {
                type Output = $command;

                fn bitor(self, command: $command) -> $command {
                    InputSource::from_string(self) | command
                }
            }

            impl BitOr<$command> for &[u8] {
                type Output = $command;

                fn bitor(self, command: $command) -> $command {
                    InputSource::from_bytes(self) | command
                }
            }

            impl BitOr<$command> for Vec<u8> {
                type Output = $command;

                fn bitor(self, command: $command) -> $command {
                    InputSource::from_bytes(self) | command
                }
            }

            impl BitOr<$command> for BufferedCommand {
                type Output = $command;

                fn bitor(self, command: $command) -> $command {
                    InputSource::from_command(self) | command
                }
            }
        )+
    };
}

pipe_operators!(Commander, BufferedCommand, RawCommand);
