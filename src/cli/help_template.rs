use indoc::indoc;

// Help text template with placeholder
pub const HELP_TEMPLATE: &str = indoc! {r#"
    Examples:
      # Run commands interactively (one per line, Ctrl-D to finish)
      %BINARY_NAME%

      # Run a script of commands
      %BINARY_NAME% commands.txt

      # Pipe commands in
      printf 'XADD orders id 1\nXRANGE orders - +\n' | %BINARY_NAME%

      # Show engine activity on stderr
      %BINARY_NAME% commands.txt --log-level debug
"#};

/// Printed by the `HELP` command.
pub const COMMAND_HELP: &str = indoc! {r#"
    XADD key field value [field value ...]
    XREAD [COUNT n] [BLOCK ms] STREAMS key [key ...] id [id ...]
    XRANGE key start end [COUNT n]      (start/end accept - and +)
    XLEN key
    XDEL key id [id ...]
    XTRIM key MAXLEN|MINID threshold
    HELP
"#};
