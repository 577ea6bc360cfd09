//! The shipped level sources.
//!
//! Each level is a hedge-bounded ASCII block with exactly one `S`, at
//! least one `E`, and all content reachable. The literals are indented for
//! readability; the normalizer's per-row trim strips that before
//! compilation. These texts are part of the external interface contract
//! and must always compile.

/// A straight corridor with a single pickup. The tutorial level.
pub const LEVEL_0: &str = "
    #######
    #S  +E#
    #######
";

/// Two short wall stubs over a pickup row.
pub const LEVEL_1: &str = "
    #########
    #S     E#
    # ## ## #
    # +   + #
    #########
";

/// Two rooms over a pickup corridor, linked through floor gaps.
pub const LEVEL_2: &str = "
    ###########
    #S   #   E#
    #    #    #
    ## ### ####
    #+        #
    ###########
";

/// A wider grid with five pickups and two exits.
pub const LEVEL_3: &str = "
    #############
    #S  +#    +E#
    #  # #  ##  #
    # +        +#
    #  ###  ### #
    #+         E#
    #############
";

/// The largest shipped maze: alternating wall bands with offset gaps.
pub const LEVEL_4: &str = "
    ###############
    #S    #      +#
    # #### ###### #
    #   +    #   E#
    # ###### #### #
    #+           +#
    ###### # ######
    #  +     E    #
    ###############
";

/// The built-in catalog, in presentation order.
pub const CATALOG: [(&str, &str); 5] = [
    ("Level0", LEVEL_0),
    ("Level1", LEVEL_1),
    ("Level2", LEVEL_2),
    ("Level3", LEVEL_3),
    ("Level4", LEVEL_4),
];
