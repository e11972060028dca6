#[macro_use]
mod common;

#[cfg(test)]
mod misc {
    tests! {
        empty_file in misc is OK
    }

    tests! {
        precedence in misc is OK
        "14"
        "8"
        "4"
        "true"
        "true"
        "-4"
        "true"
    }

    tests! {
        unexpected_character in misc is ERR
        "Scan Error - Unidentified token"
        "Lexeme - |"
        "Position - (1, 11)"
    }
}
