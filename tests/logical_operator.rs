#[macro_use]
mod common;

#[cfg(test)]
mod logical_operator {
    tests! {
        values in logical_operator is OK
        "2"
        "nil"
        "false"
        "1"
        "2"
        "ok"
    }

    tests! {
        short_circuit in logical_operator is OK
        "false"
        "false"
        "true"
        "false"
    }
}
