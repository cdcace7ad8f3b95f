/*!
# `STOP`

## Purpose
End the program.

## Example
```text
10 PLOT 0, 0
20 STOP
30 PLOT 255, 175
```

*/
