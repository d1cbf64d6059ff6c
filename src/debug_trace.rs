macro_rules! trace {
    ( @chunk $chunk:expr ) => {
        #[cfg(feature = "debug_trace")]
        {
            use crate::base::Bytes;

            println!();
            println!("-- Chunk: {:?}", Bytes::from(&$chunk[..]));
            println!();
        }
    };

    ( @char $state:expr, $ch:expr ) => {
        #[cfg(feature = "debug_trace")]
        println!("> {:?}: {:?}", $state, $ch as char);
    };

    ( @output $token:expr ) => {
        #[cfg(feature = "debug_trace")]
        println!("@output: {:#?}", $token);
    };

    ( @diagnostic $line:expr, $diagnostic:expr ) => {
        #[cfg(feature = "debug_trace")]
        println!("@diagnostic (line {}): {}", $line, $diagnostic);
    };

    ( @doctype $doctype:expr ) => {
        #[cfg(feature = "debug_trace")]
        println!("@doctype: {:?}", $doctype);
    };

    ( @end ) => {
        #[cfg(feature = "debug_trace")]
        println!("-- End");
    };
}
