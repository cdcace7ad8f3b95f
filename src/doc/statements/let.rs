/*!
# `LET <variable> = <expression>`

## Purpose
Assign a value to a variable.

## Remarks
`LET` is required. Variables need no declaration.

## Example
```text
10 LET R = 20
20 CIRCLE 128, 88, R * 2
```

*/
