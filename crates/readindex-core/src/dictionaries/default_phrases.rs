//! Built-in phrase lists, in the tab-delimited phrase file format.

/// Phrases that mark a copyright or legal notice.
pub const COPYRIGHT_PHRASES: &str = "\
# Copyright notices
all rights reserved
alle rechte vorbehalten
tous droits réservés
is a registered trademark
are registered trademarks
no part of this publication may be reproduced
";

/// Headers that open a citation or bibliography section.
pub const CITATION_PHRASES: &str = "\
# Citation section headers
references
works cited
bibliography
literature cited
sources cited
citations
further reading
literaturverzeichnis
quellenverzeichnis
";
