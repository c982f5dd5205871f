//! Static usage text

/// Top-level usage, shown for `ago`, `ago help`.
pub const AGO_USAGE: &str = "\
usage: ago <command> [arguments]

ago wraps the go command and lets you refer to packages by short, memorable
aliases. Only the get and install commands resolve aliases; every other
command, flag and argument is handed to go untouched.

define an alias:

\tago alias foo github.com/foo/bar/v2

then use it wherever the package path would go:

\tago get foo@latest

which runs:

\tgo get github.com/foo/bar/v2@latest

A leading /vN after the alias selects another major version:

\tago get foo/v3/sub    ->  go get github.com/foo/bar/v3/sub

The commands are:

\talias, a      create and manage package aliases
\tget           download packages and dependencies
\tinstall       compile and install packages and dependencies
\tcompletion    generate shell completion scripts
\thelp          display this help text

";

/// Usage of the `alias` command family.
pub const ALIAS_USAGE: &str = "\
usage:

define an alias:

\tago alias foo github.com/foo/bar/v2

remove an alias:

\tago alias rm foo

list all aliases:

\tago alias list

The sub-commands are:

\tlist, ls, l    list all aliases
\trm             remove an alias
\thelp           display this help text

";
