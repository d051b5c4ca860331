// crates/sample_document/src/lib.rs

//! The Python test module shown in the demo editor.

/// Language id the editor is configured with.
pub const SAMPLE_LANGUAGE: &str = "python";

/// Fixed source text the demo scans. Line 12 opens a nine-line
/// dictionary literal that is expected to be folded.
pub const SAMPLE_SOURCE: &str = "import __main__\n\
import os\n\
import typing\n\
\n\
# Test functions\n\
\n\
def test_user():\n\
\t\n\
\t# Input arguments\n\
\n\
\tname = \"test\"\n\
\ttestObject = {\n\
\t    'a': 1,\n\
\t    'b': 2,\n\
\t    'c': 3,\n\
\t    'd': 4,\n\
\t    'e': 5,\n\
\t    'f': 6,\n\
\t    'g': 7,\n\
\t}\n\
\n\
\t# Mocks\n\
\n\
\t# Function call\n\
\n\
\tresult = __main__.user(\n\
\t\tname=name\n\
\t)\n\
\n\
\t# Expected value\n\
\n\
\texpected = \"<h1>Hello, test!</h1>\"\n\
\n\
\t# Assertions\n\
\n\
\tassert result == expected\n";
