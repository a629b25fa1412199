#![allow(dead_code)] // Fixtures used by different test binaries appear unused per-binary

//! Shared catalogs for domain-split-po integration tests.

/// The combined catalog as it was before the split.
pub const BACKUP: &str = r#"# Spanish translations for storyarn.
msgid ""
msgstr ""
"Language: es\n"
"Plural-Forms: nplurals=2; plural=(n != 1);\n"

#: lib/storyarn_web/live/flow_live/show.ex:41
#, elixir-autogen, elixir-format
msgid "Save"
msgstr "Guardar"

#: lib/storyarn_web/live/map_live/show.ex:12
#, elixir-autogen, elixir-format
msgid "Cancel"
msgstr "Cancelar"

#: lib/storyarn_web/live/flow_live/index.ex:88
#, elixir-autogen, elixir-format
msgid "%{count} node"
msgid_plural "%{count} nodes"
msgstr[0] "%{count} nodo"
msgstr[1] "%{count} nodos"

#: lib/storyarn_web/live/sheet_live/show.ex:7
#, elixir-autogen, elixir-format
msgid ""
"This sheet is shared "
"with your workspace."
msgstr ""
"Esta hoja se comparte "
"con tu espacio de trabajo."

#: lib/storyarn_web/live/flow_live/show.ex:90
#, elixir-autogen, elixir-format
msgid "Untranslated"
msgstr ""
"#;

/// A freshly extracted `flows` domain: nothing translated yet.
pub const FLOWS: &str = r#"msgid ""
msgstr ""
"Language: es\n"
"Plural-Forms: nplurals=2; plural=(n != 1);\n"

#: lib/storyarn_web/live/flow_live/show.ex:41
#, elixir-autogen, elixir-format
msgid "Save"
msgstr ""

#: lib/storyarn_web/live/flow_live/index.ex:88
#, elixir-autogen, elixir-format
msgid "%{count} node"
msgid_plural "%{count} nodes"
msgstr[0] ""
msgstr[1] ""

#: lib/storyarn_web/live/flow_live/show.ex:90
#, elixir-autogen, elixir-format
msgid "Untranslated"
msgstr ""
"#;

/// A freshly extracted `sheets` domain with one hand-made translation.
pub const SHEETS: &str = r#"msgid ""
msgstr ""
"Language: es\n"

#: lib/storyarn_web/live/sheet_live/show.ex:7
#, elixir-autogen, elixir-format
msgid ""
"This sheet is shared "
"with your workspace."
msgstr ""

#: lib/storyarn_web/live/sheet_live/show.ex:19
#, elixir-autogen, elixir-format
msgid "Cancel"
msgstr "Descartar"
"#;
