use clap::Parser;
use std::path::PathBuf;

/// Generate a MoonSharp-consumable static wrapper class over the ImGui.NET
/// API surface.
#[derive(Parser, Debug)]
#[command(name = "imgui-wrapgen", version, about)]
#[command(
    after_help = "Example: imgui-wrapgen MyNameSpace \"C:\\Program Files\\MyProgram\\ImGuiWrapper.cs\""
)]
pub struct Cli {
    /// Namespace the generated wrapper class is placed in
    pub namespace: String,

    /// Path the generated C# file is written to (overwritten if present)
    pub output: PathBuf,

    /// Also wrap pointer-returning methods (not implemented)
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub allow_pointers: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_positional_arguments_parse() {
        let cli = Cli::try_parse_from(["imgui-wrapgen", "MyNameSpace", "out/ImGuiWrapper.cs"])
            .unwrap();
        assert_eq!(cli.namespace, "MyNameSpace");
        assert_eq!(cli.output, PathBuf::from("out/ImGuiWrapper.cs"));
        assert!(!cli.allow_pointers);
    }

    #[test]
    fn test_no_arguments_is_a_usage_error() {
        assert!(Cli::try_parse_from(["imgui-wrapgen"]).is_err());
    }

    #[test]
    fn test_one_argument_is_a_usage_error() {
        assert!(Cli::try_parse_from(["imgui-wrapgen", "MyNameSpace"]).is_err());
    }

    #[test]
    fn test_three_positional_arguments_is_a_usage_error() {
        assert!(Cli::try_parse_from(["imgui-wrapgen", "A", "b.cs", "extra"]).is_err());
    }

    #[test]
    fn test_allow_pointers_flag() {
        let cli =
            Cli::try_parse_from(["imgui-wrapgen", "A", "b.cs", "--allow-pointers"]).unwrap();
        assert!(cli.allow_pointers);
    }
}
