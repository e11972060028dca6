#[macro_use]
mod common;

#[cfg(test)]
mod string {
    tests! {
        literals in string is OK
        "hello"
        "multi"
        "line"
    }

    tests! {
        equality in string is OK
        "true"
        "false"
        "true"
    }

    tests! {
        unterminated in string is ERR
        "Scan Error - Unterminated string"
        "Lexeme - \""
        "Position - (1, 9)"
    }
}
