/*!
# `RESTORE`

## Purpose
Start reading `DATA` from the first value again.

## Example
```text
10 READ A: RESTORE: READ B
20 DATA 7
```

*/
