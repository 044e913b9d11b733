//! Argument parser filling a context's option bag from message text.

use serde_json::Value;
use std::collections::VecDeque;
use tracing::debug;

use crate::command::domain::{
    ArgumentCursor, ArgumentError, ConversionResult, ConverterRef, OptionModifier, OptionSpec,
};
use crate::context::domain::Context;

/// Parses the arguments of one prefix invocation.
///
/// The parser takes the matched command's options in declaration order and
/// fills one option per token, falling back to defaults for optional options
/// that are absent or fail to convert.
#[derive(Debug)]
pub struct ArgumentParser<'ctx> {
    context: &'ctx mut Context,
    cursor: ArgumentCursor,
    options: VecDeque<OptionSpec>,
}

impl<'ctx> ArgumentParser<'ctx> {
    /// Creates a parser for `context`.
    ///
    /// With `raw` set, that text is parsed from its start. Otherwise the
    /// prefix message content is parsed, starting after the prefix and the
    /// invoked name.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError::MissingMessageContent`] when `raw` is `None`
    /// and the invocation did not come from a prefix message.
    pub fn new(context: &'ctx mut Context, raw: Option<&str>) -> Result<Self, ArgumentError> {
        let cursor = match raw {
            Some(text) => ArgumentCursor::new(text),
            None => {
                let message = context
                    .prefix_message()
                    .ok_or(ArgumentError::MissingMessageContent)?;
                ArgumentCursor::starting_at(&message.content, message.arguments_offset())
            }
        };
        let options = context
            .command()
            .map(|command| command.options().iter().cloned().collect())
            .unwrap_or_default();
        Ok(Self {
            context,
            cursor,
            options,
        })
    }

    /// Returns the cursor over the argument text.
    #[must_use]
    pub const fn cursor(&self) -> &ArgumentCursor {
        &self.cursor
    }

    /// Returns the options not yet filled.
    #[must_use]
    pub const fn remaining_options(&self) -> &VecDeque<OptionSpec> {
        &self.options
    }

    /// Fills the context's option bag.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError::NotEnoughArguments`] when a required option
    /// has no text left, [`ArgumentError::ConverterFailure`] when a required
    /// option fails to convert, and the quoting errors of
    /// [`ArgumentCursor::next_quoted_word`] for malformed input.
    pub async fn inject_args_to_context(&mut self) -> Result<(), ArgumentError> {
        while let Some(option) = self.options.pop_front() {
            debug!(
                option = option.name(),
                arg_type = option.arg_type().describe(),
                "getting argument for option"
            );

            let raw = if option.modifier() == OptionModifier::ConsumeRest {
                self.cursor.read_rest()
            } else {
                self.cursor.next_quoted_word()?
            };

            if raw.is_empty() {
                debug!(option = option.name(), "arguments have been exhausted");
                if option.is_required() {
                    let missing = std::iter::once(option)
                        .chain(self.options.iter().filter(|o| o.is_required()).cloned())
                        .collect();
                    return Err(ArgumentError::NotEnoughArguments { missing });
                }
                self.store(&option, option.default_value().clone());
                continue;
            }

            debug!(option = option.name(), raw = %raw, "got raw argument");
            if option.modifier() == OptionModifier::Greedy {
                self.greedy_convert(raw, &option).await?;
            } else {
                self.try_convert(&raw, option).await?;
            }
        }
        Ok(())
    }

    async fn try_convert(&mut self, raw: &str, option: OptionSpec) -> Result<(), ArgumentError> {
        match convert(&*self.context, raw, option.arg_type()).await {
            Ok(value) => {
                debug!(option = option.name(), raw, %value, "converted argument");
                self.store(&option, value);
                Ok(())
            }
            Err(source) if option.is_required() => {
                debug!(option = option.name(), error = %source, "conversion failed");
                Err(ArgumentError::ConverterFailure {
                    option: Box::new(option),
                    source,
                })
            }
            Err(source) => {
                debug!(
                    option = option.name(),
                    error = %source,
                    "conversion failed, using default and shifting to the next option"
                );
                self.store(&option, option.default_value().clone());
                self.cursor.undo();
                Ok(())
            }
        }
    }

    async fn greedy_convert(
        &mut self,
        mut raw: String,
        option: &OptionSpec,
    ) -> Result<(), ArgumentError> {
        let mut values = Vec::new();
        while !raw.is_empty() {
            match convert(&*self.context, &raw, option.arg_type()).await {
                Ok(value) => {
                    debug!(option = option.name(), %value, "appending greedy value");
                    values.push(value);
                    raw = self.cursor.next_quoted_word()?;
                }
                Err(source) => {
                    debug!(option = option.name(), error = %source, "done greedy converting");
                    self.cursor.undo();
                    break;
                }
            }
        }
        self.store(option, Value::Array(values));
        Ok(())
    }

    fn store(&mut self, option: &OptionSpec, value: Value) {
        self.context.options_mut().insert(option.name(), value);
    }
}

/// Converts `raw` with `arg_type`, binding converter objects to `context`.
///
/// # Errors
///
/// Propagates the converter's error.
pub async fn convert(context: &Context, raw: &str, arg_type: &ConverterRef) -> ConversionResult {
    match arg_type {
        ConverterRef::Transform(transform) => transform(raw),
        ConverterRef::AsyncTransform(transform) => transform(raw.to_owned()).await,
        ConverterRef::Converter(factory) => factory.bind(context).convert(raw).await,
    }
}

/// Parses the arguments of `context` in one call.
///
/// # Errors
///
/// See [`ArgumentParser::new`] and [`ArgumentParser::inject_args_to_context`].
pub async fn parse_arguments(context: &mut Context, raw: Option<&str>) -> Result<(), ArgumentError> {
    ArgumentParser::new(context, raw)?
        .inject_args_to_context()
        .await
}
