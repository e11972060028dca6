#[macro_use]
mod common;

#[cfg(test)]
mod return_stmt {
    tests! {
        value in return_stmt is OK
        "7"
    }

    tests! {
        after_return in return_stmt is OK
        "ok"
    }

    tests! {
        bare in return_stmt is OK
        "nil"
    }

    tests! {
        in_while in return_stmt is OK
        "3"
    }

    tests! {
        top_level in return_stmt is ERR
        "Resolve Error - Top level return"
        "Lexeme - return"
        "Position - (1, 1)"
    }
}
